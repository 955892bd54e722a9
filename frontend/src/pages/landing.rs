use yew::prelude::*;
use log::error;

use crate::config::{self, Timings};
use crate::enhance;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "👕",
        title: "Virtual Try-On",
        body: "Upload one photo and see how any outfit looks on you before you buy.",
    },
    Feature {
        icon: "🛍️",
        title: "Every Store, One Place",
        body: "Paste a product link from Amazon, Myntra, Flipkart or Tata CLiQ and we pull in every variant.",
    },
    Feature {
        icon: "⭐",
        title: "Save Your Looks",
        body: "Keep a gallery of your try-ons and come back to them whenever you're ready.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Runs once after the first render, when the markup below is in the document.
    use_effect_with_deps(
        move |_| {
            let enhancement = match enhance::enhance_document(Timings::DEFAULT) {
                Ok(enhancement) => Some(enhancement),
                Err(err) => {
                    error!("Landing page left static: {}", err);
                    None
                }
            };
            move || drop(enhancement)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <section class="hero">
                <h1 class="hero-title">{"Try it on before you buy it."}</h1>
                <p class="hero-subtitle">
                    {"See clothes from your favourite stores on yourself in seconds. We're opening up soon."}
                </p>
                <button id={config::NOTIFY_BUTTON_ID} class="notify-button">
                    {"Notify Me"}
                </button>
            </section>
            <section class="features">
                {
                    FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </div>
                    }).collect::<Html>()
                }
            </section>
        </div>
    }
}
