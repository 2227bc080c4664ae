use std::fmt;

use panelctl_common::views::User;

const HEADERS: [&str; 4] = ["ID", "FIRST NAME", "LAST NAME", "EMAIL"];

/// A render slot reserved before a request is dispatched. Tickets are
/// monotone per table; a response applied with an older ticket than the
/// last render is stale and gets discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// The rendered user table: the only client-side state. Every successful
/// response throws away all rows and rebuilds from the payload.
#[derive(Debug, Default)]
pub struct UserTable {
    rows: Vec<User>,
    next_ticket: u64,
    applied: Option<u64>,
}

impl UserTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next render slot. Call before dispatching, so responses
    /// resolving out of order cannot clobber a newer render.
    pub fn begin(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    /// Replace the table contents with `users`, in the order given. Both the
    /// single-record and collection paths come through here; a single record
    /// is a one-element sequence. Returns false, leaving the table
    /// untouched, when `ticket` is staler than the last applied render.
    pub fn apply(&mut self, ticket: Ticket, users: Vec<User>) -> bool {
        if self.applied.is_some_and(|last| ticket.0 < last) {
            return false;
        }
        self.applied = Some(ticket.0);
        self.clear();
        self.rows.extend(users);
        true
    }

    /// Remove every row. Idempotent.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn rows(&self) -> &[User] {
        &self.rows
    }
}

impl fmt::Display for UserTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 4]> = self
            .rows
            .iter()
            .map(|user| {
                [
                    user.id.to_string(),
                    user.user_first_name.clone(),
                    user.user_last_name.clone(),
                    user.user_email.clone(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        for (i, (header, w)) in HEADERS.iter().zip(widths).enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            if i == HEADERS.len() - 1 {
                write!(f, "{header}")?;
            } else {
                write!(f, "{header:<w$}")?;
            }
        }
        writeln!(f)?;

        for row in &cells {
            for (i, (cell, w)) in row.iter().zip(widths).enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                // Cell values are data, never interpreted as markup.
                if i == row.len() - 1 {
                    write!(f, "{cell}")?;
                } else {
                    write!(f, "{cell:<w$}")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, first: &str, last: &str, email: &str) -> User {
        User {
            id,
            user_first_name: first.into(),
            user_last_name: last.into(),
            user_email: email.into(),
        }
    }

    #[test]
    fn apply_replaces_rows_in_payload_order() {
        let mut table = UserTable::new();
        let ticket = table.begin();
        table.apply(ticket, vec![user(2, "B", "B", "b@x.com"), user(1, "A", "A", "a@x.com")]);

        let ids: Vec<i64> = table.rows().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn apply_clears_prior_rows_first() {
        let mut table = UserTable::new();
        let first = table.begin();
        table.apply(first, vec![user(1, "A", "A", "a@x.com"), user(2, "B", "B", "b@x.com")]);

        let second = table.begin();
        table.apply(second, vec![user(3, "C", "C", "c@x.com")]);

        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].id, 3);
    }

    #[test]
    fn empty_collection_renders_zero_rows() {
        let mut table = UserTable::new();
        let first = table.begin();
        table.apply(first, vec![user(1, "A", "A", "a@x.com")]);

        let second = table.begin();
        table.apply(second, vec![]);

        assert!(table.rows().is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut table = UserTable::new();
        let ticket = table.begin();
        table.apply(ticket, vec![user(1, "A", "A", "a@x.com")]);

        table.clear();
        assert!(table.rows().is_empty());
        table.clear();
        table.clear();
        assert!(table.rows().is_empty());
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut table = UserTable::new();
        let older = table.begin();
        let newer = table.begin();

        assert!(table.apply(newer, vec![user(2, "B", "B", "b@x.com")]));
        assert!(!table.apply(older, vec![user(1, "A", "A", "a@x.com")]));

        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].id, 2);
    }

    #[test]
    fn display_prints_four_columns_per_row() {
        let mut table = UserTable::new();
        let ticket = table.begin();
        table.apply(ticket, vec![user(7, "Ana", "Li", "ana@x.com")]);

        let rendered = table.to_string();
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("ID  FIRST NAME  LAST NAME  EMAIL"));
        assert_eq!(lines.next(), Some("7   Ana         Li         ana@x.com"));
        assert_eq!(lines.next(), None);
    }
}
