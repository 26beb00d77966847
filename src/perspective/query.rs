use super::{FilterType, Perspective};

/// Serialize a perspective's filters into the hierarchy GET query string.
///
/// Families appear in fixed order (aspect, aspectTags, subjectTags, status),
/// each only when non-empty, joined with `&` and prefixed with `?`. EXCLUDE
/// mode prefixes `-` to every value, including after each internal comma
/// (`?status=-A,-B`); the hierarchy API depends on that exact encoding.
/// Values are assumed URL-safe; no escaping is performed.
pub fn filter_query(p: &Perspective) -> String {
    let families: [(&str, &[String], FilterType); 4] = [
        ("aspect", &p.aspect_filter, p.aspect_filter_type),
        ("aspectTags", &p.aspect_tag_filter, p.aspect_tag_filter_type),
        ("subjectTags", &p.subject_tag_filter, p.subject_tag_filter_type),
        ("status", &p.status_filter, p.status_filter_type),
    ];

    let mut q = String::new();
    for (family, values, mode) in families {
        if values.is_empty() {
            continue;
        }

        if !q.is_empty() {
            q.push('&');
        }

        let sign = match mode {
            FilterType::Include => "",
            FilterType::Exclude => "-",
        };

        // Join first, then sign after every comma: commas inside a value
        // get signed too, matching the hierarchy API's encoding.
        let joined = values.join(",");

        q.push_str(family);
        q.push('=');
        q.push_str(sign);
        if sign.is_empty() {
            q.push_str(&joined);
        } else {
            q.push_str(&joined.replace(',', &format!(",{sign}")));
        }
    }

    if q.is_empty() {
        q
    } else {
        format!("?{q}")
    }
}
