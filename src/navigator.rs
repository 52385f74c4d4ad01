use std::cmp::Reverse;

use maud::{html, Markup};
use serde::Serialize;

use crate::{Component, Context};

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub active: bool,
    pub title: String,
    pub label: String,
    pub route: String,
    pub icon: Option<String>,
    pub css: Option<String>
}

impl Link {
    pub fn new(route: &str, title: &str, label: &str) -> Self {
        Self {
            active: false,
            title: title.to_owned(),
            label: label.to_owned(),
            route: route.to_owned(),
            icon: None,
            css: None,
        }
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_owned());
        self
    }

    fn matches(&self, path: &str) -> bool {
        if self.route == "/" {
            return path == "/";
        }
        path.starts_with(&self.route)
    }
}

impl Component for Link {
    fn render(&self, _: &Context) -> Markup {
        let active_class: &str = match self.active {
            true => "bg-gray-400",
            false => "bg-gray-600"
        };

        html!{
            a href=(self.route)
                title=(self.title)
                class={"w-14 h-14 my-1 flex flex-col justify-center items-center no-underline text-white duration-200 rounded-xl hover:bg-gray-500 " (active_class) " " (self.css.as_deref().unwrap_or(""))} {
                    @if let Some(icon) = &self.icon {
                        span class="text-xl" { (icon) }
                    }
                    span class="text-xs" { (self.label) }
                }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    links: Vec<Link>
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.links.len()
    }

    /// Marks the link with the longest route matching `path` as active.
    pub fn set_current(&mut self, path: &str) {
        self.links.iter_mut().for_each(|x| {
            x.active = false;
        });

        let current = self.links.iter_mut()
            .filter(|link| link.matches(path))
            .min_by_key(|link| Reverse(link.route.len()));

        if let Some(link) = current {
            tracing::debug!(route = %link.route, path, "navigator link active");
            link.active = true;
        }
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link)
    }

    pub fn current_link(&self) -> Option<&Link> {
        self.links.iter().find(|&x| x.active)
    }
}

impl Component for Navigator {
    fn render(&self, context: &Context) -> Markup {
        html!{
            @for link in &self.links {
                (link.render(context))
            }
        }
    }
}
