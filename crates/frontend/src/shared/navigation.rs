use contracts::shared::error::UiError;

/// Full page navigation to `page`.
pub fn navigate_to(page: &str) -> Result<(), UiError> {
    let window = web_sys::window().ok_or_else(|| UiError::missing("window"))?;
    log::info!("navigate to {page}");
    window
        .location()
        .set_href(page)
        .map_err(|e| UiError::missing(format!("location for {page}: {e:?}")))
}
