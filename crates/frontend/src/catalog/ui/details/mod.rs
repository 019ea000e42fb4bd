use contracts::catalog::{Course, FieldValue};
use leptos::prelude::*;

/// Expanded detail panel for one course: the description plus a block of
/// labelled rows for the specifics.
#[component]
#[allow(non_snake_case)]
pub fn CourseDetails(course: Course, #[prop(into)] hidden: Signal<bool>) -> impl IntoView {
    view! {
        <div class="course_details" hidden=move || hidden.get()>
            <section class="course_desc">{course.desc.clone()}</section>
            <div class="specifics">
                <KeyValueRow label="Class Type" value=FieldValue::from_text(&course.class_type) />
                <KeyValueRow label="Limit" value=FieldValue::from_count(course.limit_) />
                <KeyValueRow label="Expected" value=FieldValue::from_count(course.expected) />
                <KeyValueRow label="Prerequisites" value=FieldValue::from_text(&course.prerequisites) />
                <KeyValueRow label="Enrollment Preference" value=FieldValue::from_text(&course.enrollmentpref) />
                <KeyValueRow label="Requirements/Evaluation" value=FieldValue::from_text(&course.rqmtseval) />
                <KeyValueRow label="Attributes" value=FieldValue::from_text(&course.divattr) />
                <KeyValueRow label="Distribution Notes" value=FieldValue::from_text(&course.distnote) />
                <KeyValueRow label="Department Notes" value=FieldValue::from_text(&course.deptnote) />
                <KeyValueRow label="Materials/Lab Fee" value=FieldValue::from_text(&course.matlfee) />
                <KeyValueRow label="Extra Info" value=FieldValue::from_text(&course.extrainfo) />
            </div>
        </div>
    }
}

/// One labelled row of the specifics block. Suppressed entirely for empty
/// values; multi-item values render as a bulleted list.
#[component]
#[allow(non_snake_case)]
pub fn KeyValueRow(label: &'static str, value: FieldValue) -> impl IntoView {
    match value {
        FieldValue::Empty => None,
        FieldValue::Single(text) => Some(
            view! {
                <div class="row">
                    <span class="key">{label}</span>
                    <span class="value">{text}</span>
                </div>
            }
            .into_any(),
        ),
        FieldValue::Many(items) => Some(
            view! {
                <div class="row">
                    <span class="key">{label}</span>
                    <span class="value">
                        <ul>
                            {items
                                .into_iter()
                                .map(|item| view! { <li>{item}</li> })
                                .collect_view()}
                        </ul>
                    </span>
                </div>
            }
            .into_any(),
        ),
    }
}
