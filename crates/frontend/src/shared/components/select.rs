use leptos::prelude::*;

/// Labeled native select bound to a string signal.
///
/// `options` is a list of (value, label) pairs; the option whose value
/// equals the signal is marked selected.
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || {
                label
                    .get()
                    .map(|l| {
                        view! {
                            <label class="form__label" for=select_id>
                                {l}
                            </label>
                        }
                    })
            }}
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, option_label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {option_label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}

/// Convenience: options where value and label are the same string.
pub fn plain_options<I, S>(values: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(|v| {
            let v = v.into();
            (v.clone(), v)
        })
        .collect()
}
