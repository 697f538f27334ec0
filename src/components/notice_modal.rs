//! Blocking popup for the one pending notice.

use leptos::prelude::*;

use crate::notice::Notice;

/// Modal dialog. "OK" reloads the page, which has already consumed the notice.
#[component]
pub fn NoticeModal(notice: Notice) -> impl IntoView {
    let icon_class = format!("icon-{}", notice.icon.as_str());

    view! {
        <div class="modal" role="alertdialog">
            <div class="card">
                <h3 class=icon_class>{notice.title}</h3>
                <p>{notice.text}</p>
                {notice.footer.map(|footer| view! { <p class="fine">{footer}</p> })}
                <form method="get" action="/">
                    <button type="submit">"OK"</button>
                </form>
            </div>
        </div>
    }
}
