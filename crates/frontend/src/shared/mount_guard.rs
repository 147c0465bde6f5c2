use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Флаг "компонент ещё смонтирован".
///
/// Асинхронная загрузка проверяет его перед записью в сигналы, чтобы
/// ответ, пришедший после ухода со страницы, был просто отброшен.
#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// Создаёт флаг и снимает его в `on_cleanup` текущего владельца
    pub fn new() -> Self {
        let guard = Self::detached();
        let on_unmount = guard.clone();
        on_cleanup(move || on_unmount.mark_unmounted());
        guard
    }

    /// Флаг без привязки к реактивному владельцу
    pub fn detached() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn mark_unmounted(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
