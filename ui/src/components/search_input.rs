use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("Search…"))]
    pub placeholder: AttrValue,
}

/// Controlled search box with a leading magnifier glyph.
#[function_component]
pub fn SearchInput(props: &Props) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="relative">
            <span class="pointer-events-none absolute inset-y-0 left-0 \
                         flex items-center pl-3 text-gray-400">
                <svg
                    class="h-4 w-4"
                    viewBox="0 0 20 20"
                    fill="currentColor"
                    aria-hidden="true"
                >
                    <path
                        fill-rule="evenodd"
                        d="M9 3.5a5.5 5.5 0 100 11 5.5 5.5 0 000-11zM2 9a7 7 0 1112.452 4.391l3.328 3.329a.75.75 0 11-1.06 1.06l-3.329-3.328A7 7 0 012 9z"
                        clip-rule="evenodd"
                    />
                </svg>
            </span>
            <input
                type="search"
                aria-label={props.placeholder.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                class="w-64 rounded-lg border border-gray-300 bg-white py-2 \
                       pl-9 pr-3 text-sm shadow-sm outline-none \
                       focus:border-gray-500 focus:ring-2 focus:ring-gray-200"
                {oninput}
            />
        </div>
    }
}
