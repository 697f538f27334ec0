//! Feature grid, welcome text and the advice button.

use leptos::prelude::*;

const FEATURES: [&str; 4] = [
    "Serving students from 0.5 countries",
    "Fueled by 99% caffeine and alcohol",
    "Official hamburger consumption zone",
    "Silent disco every full moon",
];

#[component]
pub fn Blurb() -> impl IntoView {
    view! {
        <div class="grid">
            {FEATURES.into_iter().map(|feature| view! { <div>{feature}</div> }).collect_view()}
        </div>
        <p class="center">
            "Welcome to the most exclusive (and only) international student office on the third floor! \
             We're here to solve all your problems, or at least pretend to while eating snacks."
        </p>
        <form class="center" method="post" action="/advice">
            <button type="submit">"Get \"Advice\""</button>
        </form>
        <p class="fine">
            "* Don't get advice from anyone."
            <br/>
            "* You can manipulate the like/dislike shit."
        </p>
    }
}
