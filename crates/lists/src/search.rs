/// Case-insensitive substring search across caller-specified fields.
///
/// `fields` names the searchable text of one item (e.g.
/// `|c| vec![c.name.clone(), c.client_code.clone()]`). A blank term matches
/// everything; the input is never mutated.
pub fn search<'a, T, F>(items: &'a [T], term: &str, fields: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Vec<String>,
{
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            fields(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Client {
        name: &'static str,
        code: &'static str,
    }

    fn clients() -> Vec<Client> {
        vec![
            Client { name: "Acme Traders", code: "CLT-0001" },
            Client { name: "Bharat Steel", code: "CLT-0002" },
            Client { name: "Steelway Logistics", code: "CLT-0003" },
        ]
    }

    fn fields(c: &Client) -> Vec<String> {
        vec![c.name.to_string(), c.code.to_string()]
    }

    #[test]
    fn matches_any_listed_field_case_insensitively() {
        let items = clients();
        let hits = search(&items, "STEEL", fields);
        let names: Vec<&str> = hits.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Bharat Steel", "Steelway Logistics"]);

        let hits = search(&items, "clt-0001", fields);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Acme Traders");
    }

    #[test]
    fn blank_term_returns_everything() {
        let items = clients();
        assert_eq!(search(&items, "", fields).len(), 3);
        assert_eq!(search(&items, "   ", fields).len(), 3);
    }

    #[test]
    fn no_match_returns_empty() {
        let items = clients();
        assert!(search(&items, "zzz", fields).is_empty());
    }
}
