use serde::{Deserialize, Serialize};

use crate::catalog::fields::split_list;

/// One course as returned by `GET /api/courses`.
///
/// Field names follow the API payload exactly; `type` is renamed because it
/// collides with the Rust keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub dept: String,
    pub code: String,
    pub title: String,
    /// Instructor names, `";;"`-joined.
    pub instr: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub class_type: String,
    pub limit_: u32,
    pub expected: u32,
    pub prerequisites: String,
    pub enrollmentpref: String,
    pub rqmtseval: String,
    pub divattr: String,
    pub distnote: String,
    pub deptnote: String,
    pub matlfee: String,
    pub extrainfo: String,
}

impl Course {
    /// Record identity. The API does not enforce uniqueness; the client
    /// treats dept + code as the key regardless.
    pub fn key(&self) -> CourseKey {
        CourseKey {
            dept: self.dept.clone(),
            code: self.code.clone(),
        }
    }

    pub fn instructors(&self) -> Vec<String> {
        split_list(&self.instr)
    }

    /// Lowercase haystack for substring search: dept, code, title and the
    /// space-joined instructor names, space-separated.
    pub fn searchable_text(&self) -> String {
        [
            self.dept.as_str(),
            self.code.as_str(),
            self.title.as_str(),
            &self.instructors().join(" "),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// Department + course code, the client-side identity of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseKey {
    pub dept: String,
    pub code: String,
}

impl std::fmt::Display for CourseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.dept, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course {
            dept: "CSCI".to_string(),
            code: "334".to_string(),
            title: "Principles of Programming Languages".to_string(),
            instr: "Jane Doe;;John Roe".to_string(),
            desc: String::new(),
            class_type: String::new(),
            limit_: 0,
            expected: 0,
            prerequisites: String::new(),
            enrollmentpref: String::new(),
            rqmtseval: String::new(),
            divattr: String::new(),
            distnote: String::new(),
            deptnote: String::new(),
            matlfee: String::new(),
            extrainfo: String::new(),
        }
    }

    #[test]
    fn test_searchable_text_is_lowercase_concatenation() {
        assert_eq!(
            course().searchable_text(),
            "csci 334 principles of programming languages jane doe john roe"
        );
    }

    #[test]
    fn test_instructors_split_on_delimiter() {
        assert_eq!(course().instructors(), vec!["Jane Doe", "John Roe"]);
    }

    #[test]
    fn test_deserializes_api_payload() {
        let json = r#"{
            "dept": "CSCI", "code": "334", "title": "Programming Languages",
            "instr": "Jane Doe", "desc": "Types and semantics.",
            "type": "Lecture", "limit_": 30, "expected": 25,
            "prerequisites": "CSCI 256", "enrollmentpref": "",
            "rqmtseval": "", "divattr": "", "distnote": "",
            "deptnote": "", "matlfee": "", "extrainfo": ""
        }"#;
        let c: Course = serde_json::from_str(json).unwrap();
        assert_eq!(c.key().to_string(), "CSCI 334");
        assert_eq!(c.class_type, "Lecture");
        assert_eq!(c.limit_, 30);
    }
}
