use crate::catalog::ui::list::CourseList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CourseList />
    }
}
