//! Pure Yew view components for the Digital Timer UI.
//!
//! These components hold no state of their own; they render from props and
//! forward clicks to the callbacks they are given.

use crate::config::*;
use yew::prelude::*;

/// Remaining time and the Running/Paused status.
#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    pub remaining: AttrValue,
    pub status: AttrValue,
}

#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    html! {
        <div class="timer-display-container">
            <div class="elapsed-timer-container">
                <h1 class="elapsed-time">{ props.remaining.clone() }</h1>
                <p class="timer-start">{ props.status.clone() }</p>
            </div>
        </div>
    }
}

/// Icon + label pair for the start/pause button.
fn toggle_face(is_running: bool) -> (&'static str, &'static str, &'static str) {
    if is_running {
        (PAUSE_ICON_URL, PAUSE_ICON_ALT, PAUSE_LABEL)
    } else {
        (PLAY_ICON_URL, PLAY_ICON_ALT, START_LABEL)
    }
}

/// Start/Pause and Reset buttons.
#[derive(Properties, PartialEq)]
pub struct TimerControllerProps {
    pub is_running: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(TimerController)]
pub fn timer_controller(props: &TimerControllerProps) -> Html {
    let (icon_url, icon_alt, label) = toggle_face(props.is_running);

    html! {
        <div class="timer-controller-container">
            <button class="timer-controller-btn" type="button" onclick={props.on_toggle.clone()}>
                <img class="timer-controller-icon" src={icon_url} alt={icon_alt} />
                <p class="timer-controller-label">{ label }</p>
            </button>
            <button class="timer-controller-btn" type="button" onclick={props.on_reset.clone()}>
                <img class="timer-controller-icon" src={RESET_ICON_URL} alt={RESET_ICON_ALT} />
                <p class="timer-controller-label">{ RESET_LABEL }</p>
            </button>
        </div>
    }
}

/// Minute limit with -/+ buttons, locked once the countdown has progressed.
#[derive(Properties, PartialEq)]
pub struct TimerLimitControllerProps {
    pub limit_minutes: u32,
    pub disabled: bool,
    pub on_decrease: Callback<MouseEvent>,
    pub on_increase: Callback<MouseEvent>,
}

#[function_component(TimerLimitController)]
pub fn timer_limit_controller(props: &TimerLimitControllerProps) -> Html {
    html! {
        <div class="timer-limit-controller-container">
            <p class="limit-label">{ LIMIT_LABEL }</p>
            <div class="timer-limit-controller">
                <button class="limit-controller-btn"
                    type="button"
                    disabled={props.disabled}
                    onclick={props.on_decrease.clone()}
                >
                    { "-" }
                </button>
                <div class="limit-label-value-container">
                    <p class="limit-value">{ props.limit_minutes }</p>
                </div>
                <button class="limit-controller-btn"
                    type="button"
                    disabled={props.disabled}
                    onclick={props.on_increase.clone()}
                >
                    { "+" }
                </button>
            </div>
        </div>
    }
}
