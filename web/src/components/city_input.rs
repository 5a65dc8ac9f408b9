use leptos::prelude::*;
use shared_types::{cities, suggest_cities, CityRecord};

/// City field with a prefix-matched suggestion dropdown over the static
/// dataset. Matching starts at two characters; picking a suggestion commits
/// its exact name, which is what submission later resolves against.
#[component]
pub fn CityInput(city: RwSignal<String>) -> impl IntoView {
    let suggestions = RwSignal::new(Vec::<CityRecord>::new());
    let is_open = RwSignal::new(false);

    let handle_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        city.set(value.clone());
        is_open.set(true);
        suggestions.set(
            suggest_cities(&value, cities())
                .into_iter()
                .cloned()
                .collect(),
        );
    };

    let handle_select = move |picked: CityRecord| {
        city.set(picked.name.clone());
        suggestions.set(Vec::new());
        is_open.set(false);
    };

    view! {
        <div class="city-input-container">
            <input
                type="text"
                class="city-input"
                placeholder="Search for your city..."
                autocomplete="off"
                prop:value=move || city.get()
                on:input=handle_input
                on:focus=move |_| is_open.set(true)
                on:blur=move |_| {
                    // Delay so a mousedown on a suggestion lands before the list closes
                    set_timeout(
                        move || is_open.set(false),
                        std::time::Duration::from_millis(200),
                    );
                }
            />

            {move || if is_open.get() && !suggestions.get().is_empty() {
                view! {
                    <div class="city-suggestions">
                        {suggestions.get().into_iter().map(|suggestion| {
                            let picked = suggestion.clone();
                            view! {
                                <div
                                    class="city-suggestion-item"
                                    on:mousedown=move |_| handle_select(picked.clone())
                                >
                                    <span class="city-suggestion-name">{suggestion.name.clone()}</span>
                                    <span class="city-suggestion-country">{suggestion.country.clone()}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
