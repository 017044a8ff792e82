use yew::prelude::*;

/// Which navigation buttons are usable, and where each one leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub current_page: u32,
    pub total_pages: u32,
    /// First and Previous
    pub can_go_back: bool,
    /// Next and Last
    pub can_go_forward: bool,
}

impl PageControls {
    /// Returns None when there is only one page, in which case nothing is
    /// rendered.
    pub fn new(current_page: u32, total_pages: u32, loading: bool) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        Some(Self {
            current_page,
            total_pages,
            can_go_back: current_page > 1 && !loading,
            can_go_forward: current_page < total_pages && !loading,
        })
    }

    pub fn previous_page(&self) -> u32 {
        self.current_page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u32 {
        (self.current_page + 1).min(self.total_pages)
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// 1-based
    pub current_page: u32,
    pub total_pages: u32,
    pub on_page_change: Callback<u32>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub loading: bool,
}

#[function_component]
pub fn Pagination(props: &Props) -> Html {
    let Some(controls) =
        PageControls::new(props.current_page, props.total_pages, props.loading)
    else {
        return html! {};
    };

    let go_to = |target: u32| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(target))
    };

    let button_class = |disabled: bool| {
        if disabled {
            "px-3 py-1.5 border border-gray-200 rounded-md text-sm \
             font-medium text-gray-400 bg-gray-100 cursor-not-allowed"
        } else {
            "px-3 py-1.5 border border-gray-300 rounded-md text-sm \
             font-medium text-gray-700 bg-white hover:bg-gray-50 \
             transition-colors duration-200"
        }
    };

    let back_disabled = !controls.can_go_back;
    let forward_disabled = !controls.can_go_forward;

    html! {
        <nav class="flex items-center gap-2" aria-label="Pagination">
            <button
                type="button"
                aria-label="First page"
                onclick={go_to(1)}
                disabled={back_disabled}
                class={button_class(back_disabled)}
            >
                {"«"}
            </button>
            <button
                type="button"
                aria-label="Previous page"
                onclick={go_to(controls.previous_page())}
                disabled={back_disabled}
                class={button_class(back_disabled)}
            >
                {"Prev"}
            </button>

            <span class="px-2 text-sm text-gray-600">
                {format!("Page {} of {}", controls.current_page, controls.total_pages)}
            </span>

            <button
                type="button"
                aria-label="Next page"
                onclick={go_to(controls.next_page())}
                disabled={forward_disabled}
                class={button_class(forward_disabled)}
            >
                {"Next"}
            </button>
            <button
                type="button"
                aria-label="Last page"
                onclick={go_to(controls.total_pages)}
                disabled={forward_disabled}
                class={button_class(forward_disabled)}
            >
                {"»"}
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_renders_nothing() {
        assert_eq!(PageControls::new(1, 1, false), None);
        assert_eq!(PageControls::new(1, 0, false), None);
    }

    #[test]
    fn first_page_can_only_go_forward() {
        let controls = PageControls::new(1, 4, false).unwrap();
        assert!(!controls.can_go_back);
        assert!(controls.can_go_forward);
        assert_eq!(controls.next_page(), 2);
    }

    #[test]
    fn last_page_can_only_go_back() {
        let controls = PageControls::new(4, 4, false).unwrap();
        assert!(controls.can_go_back);
        assert!(!controls.can_go_forward);
        assert_eq!(controls.previous_page(), 3);
    }

    #[test]
    fn middle_page_goes_both_ways() {
        let controls = PageControls::new(2, 4, false).unwrap();
        assert!(controls.can_go_back);
        assert!(controls.can_go_forward);
    }

    #[test]
    fn loading_disables_everything() {
        for page in 1..=4 {
            let controls = PageControls::new(page, 4, true).unwrap();
            assert!(!controls.can_go_back);
            assert!(!controls.can_go_forward);
        }
    }

    #[test]
    fn buttons_enable_exactly_off_the_boundaries() {
        for total in 2..=6 {
            for page in 1..=total {
                for loading in [false, true] {
                    let controls =
                        PageControls::new(page, total, loading).unwrap();
                    assert_eq!(controls.can_go_back, page != 1 && !loading);
                    assert_eq!(
                        controls.can_go_forward,
                        page != total && !loading
                    );
                }
            }
        }
    }
}
