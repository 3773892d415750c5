use yew::prelude::*;

use crate::api_client::forecast::{get_forecast, ForecastResponse};
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::common::toast::ToastContext;
use crate::forecast::{self, Units};
use crate::hooks::FetchState;

use super::chart::HourlyChart;
use super::day_card::DayCard;
use super::pager::Pager;
use super::unit_picker::UnitPicker;

/// The forecast page: unit picker, 3-day card window with pager arrows, and
/// an hourly temperature chart for the selected day.
#[function_component(Forecast)]
pub fn forecast_view() -> Html {
    let unit = use_state(|| Units::Fahrenheit);
    let page = use_state(|| 1usize);
    let selected = use_state(|| None::<String>);
    let data = use_state(FetchState::<ForecastResponse>::default);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    // Refetch whenever the unit changes (including first mount). The page and
    // selection deliberately survive the refetch.
    {
        let data = data.clone();
        let toast_ctx = toast_ctx.clone();
        use_effect_with(*unit, move |unit| {
            let unit = *unit;
            data.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match get_forecast(unit).await {
                    Ok(response) => data.set(FetchState::Success(response)),
                    Err(err) => {
                        toast_ctx.show_error(err.clone());
                        data.set(FetchState::Error(err));
                    }
                }
            });
            || ()
        });
    }

    let on_unit_change = {
        let unit = unit.clone();
        Callback::from(move |value: Units| {
            log::debug!("Switching display units to {:?}", value);
            unit.set(value);
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |new_page: usize| {
            log::trace!("Pagination cursor moved to {}", new_page);
            page.set(new_page);
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |date: String| {
            log::debug!("Selected day {}", date);
            selected.set(Some(date));
        })
    };

    html! {
        <div class="min-h-screen bg-base-200 py-4 md:py-16">
            <div class="container mx-auto max-w-4xl px-4">
                <div class="card bg-base-100 shadow min-h-screen">
                    <div class="card-body items-center w-full">
                    {
                        match &*data {
                            FetchState::NotStarted | FetchState::Loading => html! {
                                <Loading text="Loading..." />
                            },
                            FetchState::Error(error) => html! {
                                <ErrorDisplay message={error.clone()} />
                            },
                            FetchState::Success(response) => {
                                let days = forecast::group_by_day(&response.list);
                                if days.is_empty() {
                                    html! {
                                        <div class="alert alert-info max-w-lg">
                                            <i class="fas fa-info-circle"></i>
                                            <span>{"No forecast data available."}</span>
                                        </div>
                                    }
                                } else {
                                    let num_days = days.len();
                                    let current_page = forecast::clamp_page(*page, num_days);
                                    let selected_day =
                                        forecast::selected_day(&days, selected.as_deref());

                                    html! {
                                        <>
                                            <UnitPicker unit={*unit} on_change={on_unit_change.clone()} />
                                            <Pager
                                                page={current_page}
                                                num_days={num_days}
                                                on_page_change={on_page_change.clone()}
                                            />
                                            <div class="flex flex-wrap justify-around w-full gap-4 my-2 md:my-8">
                                                { for days.iter().enumerate()
                                                    .filter(|(index, _)| forecast::in_window(*index, current_page))
                                                    .map(|(_, day)| html! {
                                                        <DayCard
                                                            key={day.date.clone()}
                                                            city={response.city.clone()}
                                                            day={day.clone()}
                                                            unit={*unit}
                                                            selected={selected.as_deref() == Some(day.date.as_str())}
                                                            on_select={on_select.clone()}
                                                        />
                                                    })
                                                }
                                            </div>
                                            { if let Some(day) = selected_day {
                                                html! { <HourlyChart day={day.clone()} /> }
                                            } else {
                                                html! {}
                                            }}
                                        </>
                                    }
                                }
                            }
                        }
                    }
                    </div>
                </div>
            </div>
        </div>
    }
}
