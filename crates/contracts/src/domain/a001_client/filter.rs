use super::aggregate::ClientSummary;

/// In-memory directory search: case-insensitive substring match on name or sector.
///
/// A blank query keeps every client; input order is preserved.
pub fn filter_clients(clients: &[ClientSummary], query: &str) -> Vec<ClientSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return clients.to_vec();
    }
    clients
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query)
                || c.sector
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, name: &str, sector: Option<&str>) -> ClientSummary {
        ClientSummary {
            id: id.into(),
            name: name.into(),
            url: None,
            sector: sector.map(Into::into),
            created_at: None,
        }
    }

    fn sample() -> Vec<ClientSummary> {
        vec![
            client("1", "Acme Srl", Some("Edilizia")),
            client("2", "Rossi Impianti", Some("Impianti elettrici")),
            client("3", "Bianchi", None),
        ]
    }

    #[test]
    fn test_blank_query_keeps_all() {
        assert_eq!(filter_clients(&sample(), "  ").len(), 3);
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let found = filter_clients(&sample(), "ACME");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
    }

    #[test]
    fn test_matches_sector() {
        let found = filter_clients(&sample(), "elettric");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
    }

    #[test]
    fn test_no_match() {
        assert!(filter_clients(&sample(), "zzz").is_empty());
    }
}
