use std::collections::HashMap;

use crate::catalog::api;
use crate::catalog::state::{create_state, DetailState, SCROLL_THRESHOLD};
use crate::catalog::ui::details::CourseDetails;
use crate::shared::dom_utils::{alert, scroll_ratio};
use contracts::catalog::Course;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CourseList() -> impl IntoView {
    let state = create_state();
    // Detail state per record, keyed by fetch-order index (dept + code is
    // not unique in the API).
    let details = RwSignal::new(HashMap::<usize, DetailState>::new());

    // Startup load: populate the store and paint the first page.
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_courses().await {
            Ok(batch) => state.update(|s| {
                s.append(batch);
                s.render_next_page();
            }),
            Err(e) => {
                log::error!("failed fetching course list: {e}");
                alert("Failed fetching courses, check back later?");
            }
        }
    });

    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
        if scroll_ratio() > SCROLL_THRESHOLD {
            state.update(|s| s.render_next_page());
        }
    });
    on_cleanup(move || scroll_handle.remove());

    view! {
        <div class="content">
            <div class="header">
                <h2>"Course Catalog"</h2>
                <input
                    id="search"
                    type="text"
                    placeholder="Search courses"
                    autocomplete="off"
                    on:keydown=move |ev| {
                        let term = event_target_value(&ev);
                        state.update(|s| s.search(&term));
                    }
                />
            </div>

            <div id="courses" class="courses">
                <For
                    each=move || state.get().visible()
                    key=|(index, _)| *index
                    children=move |(index, course): (usize, Course)| {
                        view! { <CourseCard index=index course=course details=details /> }
                    }
                />
            </div>
        </div>
    }
}

/// Summary card for one course. The card node is keyed by the record's
/// fetch-order index in the list's `<For>`, so it is built once per record
/// and reused across pagination and search re-renders, and records that
/// share a dept + code still get their own card.
#[component]
#[allow(non_snake_case)]
fn CourseCard(
    index: usize,
    course: Course,
    details: RwSignal<HashMap<usize, DetailState>>,
) -> impl IntoView {
    let detail =
        Signal::derive(move || details.get().get(&index).copied().unwrap_or_default());

    let toggle = move |_| {
        details.update(|map| {
            let entry = map.entry(index).or_default();
            *entry = entry.toggled();
        });
    };

    let id_line = course.key().to_string();
    let title = course.title.clone();
    let instructors = course.instructors();

    view! {
        <div class="course">
            <div class="course_header" on:click=toggle>
                <span class="course_id">{id_line}</span>
                <span class="course_title">{title}</span>
                <span class="course_instructors">
                    {instructors
                        .into_iter()
                        .map(|name| view! { <span>{name}</span> })
                        .collect_view()}
                </span>
            </div>

            // The detail panel mounts on the first toggle and stays mounted;
            // later toggles only flip its `hidden` attribute.
            <Show when=move || detail.get().is_built()>
                <CourseDetails
                    course=course.clone()
                    hidden=Signal::derive(move || detail.get() == DetailState::Hidden)
                />
            </Show>
        </div>
    }
}
