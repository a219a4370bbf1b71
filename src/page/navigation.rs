use log::{debug, info};
use web_sys::{Document, Event, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SiteConfig;
use crate::dom::{event_element, listen, offset_top, select_all};

pub const ACTIVE_CLASS: &str = "active";

/// Id of the section the viewport is in: the last one, in document order,
/// whose top minus `lookahead` has been scrolled past.
pub fn current_section<'a>(scroll_y: f64, sections: &'a [(String, f64)], lookahead: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - lookahead)
        .last()
        .map(|(id, _)| id.as_str())
}

pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

/// Navbar `scrolled` state and nav-link highlighting, both driven by scroll.
pub fn install_navbar(window: &Window, document: &Document, config: &SiteConfig) {
    let navbar = document.get_element_by_id("navbar");
    let nav_links = select_all(document, ".nav-link");
    let scrolled_px = config.navbar_scrolled_px;
    let lookahead = config.nav_lookahead_px;

    let scroll_window = window.clone();
    let scroll_document = document.clone();
    listen(window, "scroll", move |_: Event| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);

        if let Some(navbar) = &navbar {
            let classes = navbar.class_list();
            let _ = if scroll_y > scrolled_px {
                classes.add_1("scrolled")
            } else {
                classes.remove_1("scrolled")
            };
        }

        let sections: Vec<(String, f64)> = select_all(&scroll_document, "section[id]")
            .iter()
            .map(|section| (section.id(), offset_top(section)))
            .collect();
        let active_href = current_section(scroll_y, &sections, lookahead).map(|id| format!("#{}", id));

        for link in &nav_links {
            let _ = link.class_list().remove_1(ACTIVE_CLASS);
            if active_href.is_some() && link.get_attribute("href") == active_href {
                let _ = link.class_list().add_1(ACTIVE_CLASS);
            }
        }
    });
    info!("Navigation highlighting wired");
}

/// Same-page anchors scroll smoothly, leaving room for the fixed navbar.
pub fn install_smooth_scroll(window: &Window, document: &Document, config: &SiteConfig) {
    let header_offset = config.scroll_offset_px;

    for link in select_all(document, "a[href^=\"#\"]") {
        let window = window.clone();
        let document = document.clone();
        let anchor = link.clone();
        listen(&link, "click", move |e: Event| {
            e.prevent_default();

            let href = anchor.get_attribute("href").unwrap_or_default();
            // A bare "#" is not a valid selector
            let target = match document.query_selector(&href) {
                Ok(Some(target)) => target,
                _ => {
                    debug!("No scroll target for {:?}", href);
                    return;
                }
            };

            let options = ScrollToOptions::new();
            options.set_top(scroll_target(offset_top(&target), header_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}

pub fn install_mobile_menu(document: &Document) {
    let (hamburger, nav_menu) = match (
        document.get_element_by_id("hamburger"),
        document.get_element_by_id("nav-menu"),
    ) {
        (Some(hamburger), Some(nav_menu)) => (hamburger, nav_menu),
        _ => {
            debug!("No mobile menu on this page");
            return;
        }
    };

    let close = {
        let hamburger = hamburger.clone();
        let nav_menu = nav_menu.clone();
        move || {
            let _ = hamburger.class_list().remove_1(ACTIVE_CLASS);
            let _ = nav_menu.class_list().remove_1(ACTIVE_CLASS);
        }
    };

    {
        let toggled = hamburger.clone();
        let nav_menu = nav_menu.clone();
        listen(&hamburger, "click", move |_: Event| {
            let _ = toggled.class_list().toggle(ACTIVE_CLASS);
            let _ = nav_menu.class_list().toggle(ACTIVE_CLASS);
        });
    }

    for link in select_all(document, ".nav-link") {
        let close = close.clone();
        listen(&link, "click", move |_: Event| close());
    }

    listen(document, "click", move |e: Event| {
        let inside = event_element(&e)
            .map(|target| {
                let node: &Node = &target;
                hamburger.contains(Some(node)) || nav_menu.contains(Some(node))
            })
            .unwrap_or(false);
        if !inside {
            close();
        }
    });
    info!("Mobile menu wired");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("tutorials".to_string(), 800.0),
            ("tips".to_string(), 1600.0),
            ("contact".to_string(), 2400.0),
        ]
    }

    #[test]
    fn section_activates_lookahead_before_its_top() {
        let sections = sections();
        assert_eq!(current_section(599.0, &sections, 200.0), Some("home"));
        assert_eq!(current_section(600.0, &sections, 200.0), Some("tutorials"));
        assert_eq!(current_section(1500.0, &sections, 200.0), Some("tips"));
        assert_eq!(current_section(10_000.0, &sections, 200.0), Some("contact"));
    }

    #[test]
    fn nothing_is_active_above_every_threshold() {
        let sections = vec![("intro".to_string(), 500.0), ("more".to_string(), 900.0)];
        assert_eq!(current_section(0.0, &sections, 200.0), None);
        assert_eq!(current_section(299.0, &sections, 200.0), None);
        assert_eq!(current_section(300.0, &sections, 200.0), Some("intro"));
        assert_eq!(current_section(0.0, &[], 200.0), None);
    }

    #[test]
    fn later_section_wins_when_tops_coincide() {
        let sections = vec![("a".to_string(), 100.0), ("b".to_string(), 100.0)];
        assert_eq!(current_section(100.0, &sections, 200.0), Some("b"));
    }

    #[test]
    fn scroll_target_clears_the_navbar() {
        assert_eq!(scroll_target(800.0, 70.0), 730.0);
        assert_eq!(scroll_target(20.0, 70.0), -50.0);
    }
}
