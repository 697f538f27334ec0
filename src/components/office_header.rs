//! Locale selector and the office's letterhead.

use leptos::prelude::*;

use crate::locale::Locale;

/// Language picker plus the title block.
#[component]
pub fn OfficeHeader(active: Locale) -> impl IntoView {
    view! {
        <form class="lang" method="post" action="/locale">
            <select name="language">
                {Locale::ALL
                    .into_iter()
                    .map(|locale| {
                        view! {
                            <option value={locale.code()} selected={locale == active}>
                                {locale.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button type="submit">"Change"</button>
        </form>
        <h3>"Real Official and True One and Only"</h3>
        <h2>"International Students Office"</h2>
        <h3>"of The Third Floor Residents"</h3>
        <span class="badge">"Room 327"</span>
        <p class="quote">"\"Leave a beer in front of the door!\""</p>
    }
}
