use crate::error::{Error, Result};

/// Named tabs of which exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    tabs: Vec<String>,
    active: usize,
}

impl TabGroup {
    /// The first tab is active at first.
    pub fn new(tabs: Vec<String>) -> Result<Self> {
        if tabs.is_empty() {
            return Err(Error::EmptyTabGroup);
        }

        Ok(Self { tabs, active: 0 })
    }

    pub fn active(&self) -> &str {
        &self.tabs[self.active]
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn is_active(&self, tab: &str) -> bool {
        self.active() == tab
    }

    pub fn select(&mut self, tab: &str) -> Result<()> {
        let index = self
            .tabs
            .iter()
            .position(|name| name == tab)
            .ok_or_else(|| Error::UnknownTab(tab.to_owned()))?;
        self.active = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_group() -> TabGroup {
        TabGroup::new(vec![
            "information-div".to_owned(),
            "reviews-div".to_owned(),
            "evaluators-div".to_owned(),
        ])
        .unwrap()
    }

    #[test]
    fn should_activate_first_tab() {
        let group = tab_group();
        assert_eq!("information-div", group.active());
        assert!(group.is_active("information-div"));
        assert!(!group.is_active("reviews-div"));
    }

    #[test]
    fn should_select_tab() {
        let mut group = tab_group();
        group.select("evaluators-div").unwrap();
        assert_eq!("evaluators-div", group.active());
        assert_eq!(
            1,
            group.tabs().iter().filter(|tab| group.is_active(tab)).count()
        );
    }

    #[test]
    fn should_keep_active_tab_when_selecting_unknown_tab() {
        let mut group = tab_group();
        group.select("reviews-div").unwrap();
        assert_eq!(
            Err(Error::UnknownTab("login-div".to_owned())),
            group.select("login-div")
        );
        assert_eq!("reviews-div", group.active());
    }

    #[test]
    fn should_reject_empty_group() {
        assert_eq!(Err(Error::EmptyTabGroup), TabGroup::new(vec![]));
    }
}
