//! Composer, message list and "Load More".
//!
//! DESIGN
//! ======
//! Messages arrive already sorted; this component only lays them out. Each
//! vote button is its own form so a vote works without scripting.

use leptos::prelude::*;

use crate::store::Message;

/// One message row with its like/dislike buttons.
#[component]
pub fn MessageRow(message: Message) -> impl IntoView {
    let id = message.id.to_string();
    let like_action = format!("/messages/{id}/like");
    let dislike_action = format!("/messages/{id}/dislike");

    view! {
        <div class="msg" data-id=id>
            <p>{message.text}</p>
            <div class="votes">
                <form method="post" action=like_action>
                    <button type="submit">{format!("👍 {}", message.likes)}</button>
                </form>
                <form method="post" action=dislike_action>
                    <button type="submit">{format!("👎 {}", message.dislikes)}</button>
                </form>
            </div>
        </div>
    }
}

/// The board section: composer holding `draft`, then `messages` in order.
#[component]
pub fn BoardSection(draft: String, messages: Vec<Message>) -> impl IntoView {
    view! {
        <section>
            <h3>"Leave us a message"</h3>
            <form class="composer" method="post" action="/messages">
                <textarea name="text" placeholder="Leave a message...">{draft}</textarea>
                <button type="submit">"Send"</button>
            </form>
            <div class="messages">
                {messages.into_iter().map(|message| view! { <MessageRow message=message/> }).collect_view()}
            </div>
            <form class="center" method="post" action="/messages/more">
                <button type="submit">"Load More"</button>
            </form>
        </section>
    }
}
