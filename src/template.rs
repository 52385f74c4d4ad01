use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{Component, Context, CourtTheme, Theme};

/// Defines the root frame for rendering components
pub trait Template : Clone + Send {
    fn page(&self, context: &Context, body: Markup) -> Markup;
}

#[derive(Clone, Default)]
pub struct PageTemplate<P = CourtTheme> {
    palette: P,
}

impl<P> PageTemplate<P> {
    pub fn new(palette: P) -> Self {
        Self { palette }
    }

    fn head(&self, context: &Context) -> Markup {
        html! {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";

                script src="https://cdn.tailwindcss.com" { }
                script { (PreEscaped("tailwind.config = { darkMode: 'class' };")) }
                script src="https://unpkg.com/htmx.org@1.9.9" {}

                title {
                    (context.title())
                }
            }
        }
    }
}

impl<P> PageTemplate<P>
where P: Theme {
    fn theme_toggle(&self, context: &Context) -> Markup {
        html! {
            // full reload so the root class flips
            form method="post" action="/theme" hx-boost="false" {
                button type="submit"
                    class={"px-3 py-1 rounded-md text-sm " (self.palette.primary().classes())} {
                    (context.theme.toggle_label())
                }
            }
        }
    }
}

impl<P> Template for PageTemplate<P>
where P: Theme + Clone + Send {
    fn page(&self, context: &Context, body: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="es" class=(context.theme.root_class()) {
                (self.head(context))

                body
                    class={"w-full min-h-screen m-0 p-0 font-sans " (self.palette.background().classes())} {

                    div #root class="flex min-h-screen max-w-5xl mx-auto" {

                        div #navigator
                            class={"flex flex-col items-center justify-start p-2 " (self.palette.navigation().classes())}
                            hx-boost="true"
                            hx-target="#content"
                            hx-swap="innerHTML" {
                                (context.navigator.render(context))
                            }

                        div class="flex flex-col w-full p-5" {
                            header class="flex flex-row items-center justify-between mb-4" {
                                h1 class={"text-2xl font-bold " (self.palette.heading().classes())} {
                                    (context.app_title)
                                }
                                (self.theme_toggle(context))
                            }

                            div #content
                                hx-boost="true"
                                class="flex flex-col justify-start w-full" {
                                (body)
                            }
                        }
                    }
                }
            }
        }
    }
}
