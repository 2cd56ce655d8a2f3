/// Static set of admin email addresses, compared case-insensitively.
///
/// Loaded once from configuration at process start; there is no runtime
/// mutation and no persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminAllowList {
    emails: Vec<String>,
}

impl AdminAllowList {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: emails
                .into_iter()
                .map(|e| e.into().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.emails.iter().any(|e| *e == email)
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let list = AdminAllowList::new(["Registrar@X.edu"]);
        assert!(list.contains("registrar@x.edu"));
        assert!(list.contains(" REGISTRAR@x.edu "));
        assert!(!list.contains("someone@x.edu"));
    }

    #[test]
    fn empty_list_admits_nobody() {
        let list = AdminAllowList::default();
        assert!(list.is_empty());
        assert!(!list.contains("registrar@x.edu"));
    }
}
