pub mod color_badge;
pub mod page_header;
pub mod pagination_controls;
pub mod progress_bar;
pub mod stat_card;
