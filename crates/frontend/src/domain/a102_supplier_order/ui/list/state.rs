use contracts::domain::a102_supplier_order::aggregate::{self, Order, OrderStatus};
use contracts::shared::list_utils::{filter_list, sort_list, Searchable};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub search_query: String,
    pub status_filter: Option<OrderStatus>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for OrdersState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            search_query: String::new(),
            status_filter: None,
            sort_field: "order_date".to_string(),
            sort_ascending: false, // Newest first
            is_loaded: false,
        }
    }
}

impl OrdersState {
    /// Клик по заголовку: та же колонка меняет направление, новая — по возрастанию
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    /// Поиск, затем фильтр по статусу, затем сортировка
    pub fn visible(&self) -> Vec<Order> {
        let found = filter_list(self.orders.clone(), &self.search_query);
        let mut result = aggregate::filter_by_status(found, self.status_filter);
        sort_list(&mut result, &self.sort_field, self.sort_ascending);
        result
    }

    /// Сколько заказов нашлось без учёта статуса (чип "All"), включая
    /// заказы с неизвестным статусом
    pub fn search_count(&self) -> usize {
        let needle = self.search_query.to_lowercase();
        self.orders
            .iter()
            .filter(|o| o.matches_filter(&needle))
            .count()
    }

    /// Счётчики для чипов статусов; считаются по результатам поиска
    pub fn status_counts(&self) -> Vec<(OrderStatus, usize)> {
        let found = filter_list(self.orders.clone(), &self.search_query);
        aggregate::count_by_status(&found)
    }
}

pub fn create_state() -> RwSignal<OrdersState> {
    RwSignal::new(OrdersState::default())
}
