use yew::prelude::*;

use crate::api_client::forecast::{icon_url, CityInfo};
use crate::forecast::{format_long_date, DayForecast, Units};

#[derive(Properties, PartialEq)]
pub struct DayCardProps {
    pub city: CityInfo,
    pub day: DayForecast,
    pub unit: Units,
    pub selected: bool,
    pub on_select: Callback<String>,
}

/// One day of the pagination window: city header, representative weather icon
/// (wide screens only), rounded average temperature and the headline weather.
/// The selected card is elevated, the others stay flat and outlined.
#[function_component(DayCard)]
pub fn day_card(props: &DayCardProps) -> Html {
    let headline = props.day.headline_weather();

    let onclick = {
        let on_select = props.on_select.clone();
        let date = props.day.date.clone();
        Callback::from(move |_| on_select.emit(date.clone()))
    };

    let card_class = classes!(
        "card",
        "bg-base-100",
        "cursor-pointer",
        "min-w-[38%]",
        "md:min-w-[28%]",
        if props.selected { "shadow-xl" } else { "border border-base-300" },
    );

    html! {
        <div class={card_class} onclick={onclick}>
            <div class="card-body items-center text-center p-4">
                <h2 class="card-title text-base">
                    {format!("{}, {}", props.city.name, props.city.country)}
                </h2>
                <p class="text-sm text-gray-500">{format_long_date(&props.day.date)}</p>
                { if let Some(weather) = headline {
                    html! {
                        <figure class="hidden md:block">
                            <img src={icon_url(&weather.icon)} alt={weather.description.clone()} />
                        </figure>
                    }
                } else {
                    html! {}
                }}
                <p class="text-4xl font-bold">
                    {format!("{}{}", props.day.average_temp(), props.unit.suffix())}
                </p>
                <div class="flex items-baseline gap-1">
                    <span class="font-semibold">
                        {headline.map(|w| w.main.clone()).unwrap_or_default()}
                    </span>
                    <span class="text-sm">
                        {headline.map(|w| format!("({})", w.description)).unwrap_or_default()}
                    </span>
                </div>
            </div>
        </div>
    }
}
