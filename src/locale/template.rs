use std::collections::BTreeMap;

/// Replaces `{name}` tokens with `params[name]`. Unknown or malformed tokens stay verbatim.
pub fn substitute(template: &str, params: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            let is_ident = !name.is_empty()
                && name.chars().all(|c| c.is_alphanumeric() || c == '_');
            if is_ident {
                params.get(name).map(|value| (value, close))
            } else {
                None
            }
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn substitute_one(template: &str, name: &str, value: &str) -> String {
    let params = BTreeMap::from([(name.to_string(), value.to_string())]);
    substitute(template, &params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_known_tokens() {
        let out = substitute("Savings at {pitch} m", &params(&[("pitch", "5")]));
        assert_eq!(out, "Savings at 5 m");
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = substitute("{a}-{b}-{a}", &params(&[("a", "1"), ("b", "2")]));
        assert_eq!(out, "1-2-1");
    }

    #[test]
    fn leaves_unknown_and_malformed_tokens() {
        let p = params(&[("date", "July 14")]);
        assert_eq!(substitute("{pitch} on {date}", &p), "{pitch} on July 14");
        assert_eq!(substitute("open { brace", &p), "open { brace");
        assert_eq!(substitute("{not a token}", &p), "{not a token}");
        assert_eq!(substitute("trailing {", &p), "trailing {");
        assert_eq!(substitute("{{date}}", &p), "{July 14}");
    }

    #[test]
    fn handles_multibyte_text() {
        let out = substitute_one("Température du {date} °C", "date", "14/07");
        assert_eq!(out, "Température du 14/07 °C");
    }
}
