use yew::prelude::*;

use crate::forecast::Units;

#[derive(Properties, PartialEq)]
pub struct UnitPickerProps {
    pub unit: Units,
    pub on_change: Callback<Units>,
}

/// Fahrenheit/Celsius radio pair. Changing the unit refetches the forecast.
#[function_component(UnitPicker)]
pub fn unit_picker(props: &UnitPickerProps) -> Html {
    let radio = |value: Units| -> Html {
        let on_change = props.on_change.clone();
        let onchange = Callback::from(move |_: Event| on_change.emit(value));

        html! {
            <label class="label cursor-pointer gap-2">
                <input
                    type="radio"
                    name="unit"
                    class="radio radio-primary"
                    checked={props.unit == value}
                    onchange={onchange}
                />
                <span class="label-text">{value.label()}</span>
            </label>
        }
    };

    html! {
        <div class="flex justify-center gap-4">
            {radio(Units::Fahrenheit)}
            {radio(Units::Celsius)}
        </div>
    }
}
