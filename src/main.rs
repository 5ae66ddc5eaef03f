//! Main module for the Digital Timer application using Yew.
//! Wires the timer hook into the view components.

use digital_timer::{format_remaining, status_label};
use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{TimerController, TimerDisplay, TimerLimitController};
use config::APP_TITLE;
use hooks::use_digital_timer;

/// Countdown timer with start/pause, reset and limit controls.
#[function_component(DigitalTimer)]
fn digital_timer() -> Html {
    let timer = use_digital_timer();
    let state = timer.state;

    html! {
        <div class="app-container">
            <h1 class="heading">{ APP_TITLE }</h1>
            <div class="digital-timer-container">
                <TimerDisplay
                    remaining={format_remaining(&state)}
                    status={status_label(&state)}
                />
                <div class="controls-container">
                    <TimerController
                        is_running={state.is_running}
                        on_toggle={timer.on_toggle.clone()}
                        on_reset={timer.on_reset.clone()}
                    />
                    <TimerLimitController
                        limit_minutes={state.limit_minutes}
                        disabled={state.limit_locked()}
                        on_decrease={timer.on_decrease_limit.clone()}
                        on_increase={timer.on_increase_limit.clone()}
                    />
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! { <DigitalTimer /> }
}

/// Entry point: installs the panic hook and mounts the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
