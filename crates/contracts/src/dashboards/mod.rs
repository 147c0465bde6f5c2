pub mod d100_supplier_overview;
