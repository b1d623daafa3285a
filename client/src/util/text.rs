//! User-facing copy. The board is Russian-language.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

pub const APP_TITLE: &str = "День Учителя";

pub const TAB_HOME: &str = "Главная";
pub const TAB_GREETINGS: &str = "Поздравления";

pub const ERROR_TITLE: &str = "Ошибка";
/// Shared by list-fetch and submit failures.
pub const LOAD_FAILED: &str = "Не удалось загрузить видео";

pub const SUBMIT_SUCCESS_TITLE: &str = "Успешно!";
pub const COPIED_TITLE: &str = "Скопировано!";
pub const COPIED_DESCRIPTION: &str = "Ссылка скопирована в буфер обмена";
pub const COPY_FAILED: &str = "Не удалось скопировать ссылку";
pub const VIDEO_NOT_FOUND: &str = "Видео не найдено";

pub const SUBMIT_IDLE: &str = "Отправить поздравление";
pub const SUBMIT_BUSY: &str = "Загрузка...";
pub const LOADING: &str = "Загрузка...";

/// `None` when the endpoint answered without an id.
#[must_use]
pub fn submit_success_description(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("Ваше поздравление загружено. ID: {id}"),
        None => "Ваше поздравление загружено.".to_owned(),
    }
}

#[must_use]
pub fn greetings_count_label(count: usize) -> String {
    format!("{count} поздравлений от благодарных учеников")
}

#[must_use]
pub fn submit_button_label(submitting: bool) -> &'static str {
    if submitting { SUBMIT_BUSY } else { SUBMIT_IDLE }
}
