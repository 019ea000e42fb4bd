use crate::shared::api_utils::api_url;
use crate::shared::dom_utils::alert;
use contracts::catalog::Course;

/// Fetch the full course list. Consumed once at startup; no retry, no
/// timeout, no deduplication.
pub async fn fetch_courses() -> Result<Vec<Course>, String> {
    let text = get_json(&api_url("/api/courses")).await?;
    let data: Vec<Course> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

/// Fire-and-forget fetch of a single course's section details.
///
/// The response is only logged for diagnostics; nothing in the UI consumes
/// it yet. Failure alerts the user, same as the list fetch.
pub fn fetch_course_details(course_id: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        match get_json(&api_url(&format!("/api/course/{}", course_id))).await {
            Ok(text) => match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(details) => log::debug!("course {} details: {}", course_id, details),
                Err(e) => log::error!("course {} details unparseable: {}", course_id, e),
            },
            Err(e) => {
                log::error!("failed fetching course {} details: {}", course_id, e);
                alert("Failed fetching details, check back later?");
            }
        }
    });
}

async fn get_json(url: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}
