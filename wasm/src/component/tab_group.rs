use crate::Result;
use crate::component::alert::alert_on_error;
use crate::utils::{
    add_class, add_event_listener, get_element_by_id, query_selector_all, remove_class,
    set_visible,
};
use documents_manager::tab::TabGroup;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element};

const TAB_GROUP_SELECTOR: &str = "[data-tab-group]";
const TAB_SELECTOR: &str = "[data-tab]";
const TAB_ATTRIBUTE: &str = "data-tab";
const ACTIVE_CLASS: &str = "active";

/// Navigation items of a container, each one showing the pane named by its `data-tab` attribute.
struct TabGroupElements {
    group: RefCell<TabGroup>,
    items: Vec<(Element, Element)>,
}

impl TabGroupElements {
    fn from_container(document: &Document, container: &Element) -> Result<Self> {
        let mut names = vec![];
        let mut items = vec![];
        for nav_item in query_selector_all(container, TAB_SELECTOR)? {
            let name = nav_item.get_attribute(TAB_ATTRIBUTE).unwrap_or_default();
            let pane = get_element_by_id(document, &name)?;
            names.push(name);
            items.push((nav_item, pane));
        }

        Ok(Self {
            group: RefCell::new(TabGroup::new(names)?),
            items,
        })
    }

    fn select(&self, name: &str) -> Result<()> {
        self.group.borrow_mut().select(name)?;
        self.render();
        Ok(())
    }

    fn render(&self) {
        let group = self.group.borrow();
        for (nav_item, pane) in &self.items {
            let active = nav_item
                .get_attribute(TAB_ATTRIBUTE)
                .is_some_and(|name| group.is_active(&name));
            if active {
                add_class(nav_item, ACTIVE_CLASS);
            } else {
                remove_class(nav_item, ACTIVE_CLASS);
            }
            set_visible(pane, active);
        }
    }
}

/// Show the first tab of every group in the page and let the user switch between them.
pub fn init_tab_groups(document: &Document) -> Result<()> {
    let Some(root) = document.document_element() else {
        return Ok(());
    };

    for container in query_selector_all(&root, TAB_GROUP_SELECTOR)? {
        let tabs = Rc::new(TabGroupElements::from_container(document, &container)?);
        tabs.render();

        for (nav_item, _) in &tabs.items {
            let name = nav_item.get_attribute(TAB_ATTRIBUTE).unwrap_or_default();
            let tabs = Rc::clone(&tabs);
            add_event_listener(nav_item, "click", move |event| {
                event.prevent_default();
                alert_on_error(tabs.select(&name));
            })?;
        }
    }

    Ok(())
}
