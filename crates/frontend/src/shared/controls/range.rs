use contracts::shared::markup;
use leptos::prelude::*;

/// Text shown next to a range slider.
pub fn range_display(value: u8) -> String {
    format!("{value}%")
}

#[component]
pub fn RangeSlider(
    #[prop(into)] label: String,
    value: RwSignal<u8>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="range"
                class=markup::CLASS_RANGE_SLIDER
                min="0"
                max="100"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<u8>() {
                        value.set(v.min(100));
                    }
                }
            />
            <span class=markup::CLASS_RANGE_VALUE>{move || range_display(value.get())}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_display() {
        assert_eq!(range_display(0), "0%");
        assert_eq!(range_display(85), "85%");
    }
}
