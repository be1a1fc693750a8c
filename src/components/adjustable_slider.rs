use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AdjustableSliderProps {
    pub min: u32,
    pub max: u32,
    #[prop_or(1)]
    pub step: u32,
    pub value: u32,
    pub on_change: Callback<u32>,
    /// Blocks the plus button even below `max` (e.g. nothing left to spend).
    #[prop_or_default]
    pub disabled_plus: bool,
}

pub fn step_down(value: u32, min: u32, step: u32) -> Option<u32> {
    (value > min).then(|| value.saturating_sub(step).max(min))
}

pub fn step_up(value: u32, max: u32, step: u32, blocked: bool) -> Option<u32> {
    (value < max && !blocked).then(|| value.saturating_add(step).min(max))
}

/// Typed entry: non-numbers are ignored, numbers are pulled into range.
pub fn parse_entry(raw: &str, min: u32, max: u32) -> Option<u32> {
    let v: i64 = raw.trim().parse().ok()?;
    Some(v.clamp(i64::from(min), i64::from(max)) as u32)
}

#[function_component(AdjustableSlider)]
pub fn adjustable_slider(props: &AdjustableSliderProps) -> Html {
    let (min, max, step, value) = (props.min, props.max, props.step, props.value);

    let on_minus = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            if let Some(v) = step_down(value, min, step) {
                cb.emit(v);
            }
        })
    };
    let on_plus = {
        let cb = props.on_change.clone();
        let blocked = props.disabled_plus;
        Callback::from(move |_| {
            if let Some(v) = step_up(value, max, step, blocked) {
                cb.emit(v);
            }
        })
    };
    let on_range = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(v) = parse_entry(&input.value(), min, max) {
                cb.emit(v);
            }
        })
    };
    let on_entry = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(v) = parse_entry(&input.value(), min, max) {
                cb.emit(v);
            }
        })
    };

    let btn_style = "width:32px; height:32px; flex-shrink:0; border-radius:6px; border:1px solid #30363d; background:#1c2128; color:#fff;";
    html! {
        <div style="display:flex; align-items:center; gap:8px; width:100%;">
            <button style={btn_style} onclick={on_minus} disabled={value <= min}>{"−"}</button>
            <input
                type="range"
                style="flex:1;"
                min={min.to_string()}
                max={max.to_string()}
                step={step.to_string()}
                value={value.to_string()}
                oninput={on_range}
            />
            <button style={btn_style} onclick={on_plus} disabled={value >= max || props.disabled_plus}>{"+"}</button>
            <input
                type="number"
                style="width:64px; height:30px; text-align:center; border-radius:6px; border:1px solid #30363d; background:#0d1117; color:#fff;"
                value={value.to_string()}
                oninput={on_entry}
            />
        </div>
    }
}
