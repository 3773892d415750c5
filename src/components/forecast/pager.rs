use yew::prelude::*;

use crate::forecast;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub page: usize,
    pub num_days: usize,
    pub on_page_change: Callback<usize>,
}

/// Prev/next arrows over the 3-day window. Arrows at a bound stay laid out
/// but turn invisible, so the cards below do not shift; with fewer than three
/// days both arrows disappear and the cursor never moves.
#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let current = props.page;
    let max_page = forecast::max_page(props.num_days);

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if current > 1 {
                on_page_change.emit(current - 1);
            }
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if current < max_page {
                on_page_change.emit(current + 1);
            }
        })
    };

    html! {
        <div class="flex justify-around items-center w-full my-2">
            <button
                class={classes!("btn", "btn-ghost", if current > 1 { "" } else { "invisible" })}
                onclick={on_previous}
            >
                <i class="fas fa-arrow-left text-2xl md:text-4xl"></i>
            </button>
            <button
                class={classes!("btn", "btn-ghost", if current < max_page { "" } else { "invisible" })}
                onclick={on_next}
            >
                <i class="fas fa-arrow-right text-2xl md:text-4xl"></i>
            </button>
        </div>
    }
}
