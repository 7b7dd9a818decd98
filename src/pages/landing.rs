use std::rc::Rc;

use yew::prelude::*;

use crate::components::parallax_shapes::ParallaxShapes;
use crate::components::quiz_preview::QuizPreview;
use crate::config::EffectsConfig;
use crate::effects::anchor::use_anchor_scroll;
use crate::effects::reveal::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<EffectsConfig>,
}

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🧭",
        "Know yourself faster",
        "Short, playful questions that get to the point without the endless forms.",
    ),
    (
        "⚡",
        "Instant feedback",
        "Every answer moves you forward. No waiting, no loading screens.",
    ),
    (
        "🔒",
        "Nothing leaves your browser",
        "The preview runs entirely on this page. Close the tab and it's gone.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    ("Pick an answer", "Tap whichever option feels closest. There are no wrong ones."),
    ("Keep going", "Ten quick questions, one at a time."),
    ("See the finish line", "Get to the end and sign up for the full version."),
];

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = &props.config;
    use_scroll_reveal(config);
    use_anchor_scroll(config);

    html! {
        <div class="landing-page" id="top">
            <ParallaxShapes
                count={config.parallax_shape_count}
                speed_step={config.parallax_speed_step}
                rotation_factor={config.parallax_rotation_factor}
            />

            <nav class="top-nav">
                <div class="nav-content">
                    <a href="#top" class="nav-logo">{"quizpeek"}</a>
                    <div class="nav-right">
                        <a href="#features" class="nav-link">{"Features"}</a>
                        <a href="#how-it-works" class="nav-link">{"How it works"}</a>
                        <a href="#quiz" class="nav-link">{"Try it"}</a>
                    </div>
                </div>
            </nav>

            <header class="hero">
                <div class="hero-content">
                    <h1>{"Find out what makes you tick"}</h1>
                    <p class="hero-subtitle">
                        {"A ten question personality quiz you can finish before your coffee cools down."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#quiz" class="hero-cta">{"Take the preview"}</a>
                        <a href="#how-it-works" class="hero-secondary">{"How it works"}</a>
                    </div>
                </div>
            </header>

            <section id="features" class="features">
                <h2>{"Why people like it"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, body)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>{"How it works"}</h2>
                <div class="steps">
                    { for STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                        <div class="step">
                            <div class="step-number">{(i + 1).to_string()}</div>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="quiz" class="quiz-section">
                <h2>{"Give it a spin"}</h2>
                <QuizPreview advance_delay_ms={config.quiz_advance_delay_ms} />
            </section>

            <footer class="footer">
                <a href="#top" class="footer-link">{"Back to top"}</a>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                        background: #0f1020;
                        color: #f4f4f8;
                        font-family: system-ui, sans-serif;
                        overflow-x: hidden;
                    }

                    .floating-shapes {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                    }

                    .floating-shape {
                        position: absolute;
                        border-radius: 30%;
                        opacity: 0.12;
                        background: linear-gradient(135deg, #7b5cff, #1ec8ff);
                        will-change: transform;
                    }

                    .shape-1 { width: 220px; height: 220px; top: 10%; left: 5%; }
                    .shape-2 { width: 140px; height: 140px; top: 45%; right: 8%; }
                    .shape-3 { width: 320px; height: 320px; top: 70%; left: 30%; }
                    .shape-4 { width: 90px; height: 90px; top: 25%; left: 60%; }

                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 10;
                        backdrop-filter: blur(8px);
                        background: rgba(15, 16, 32, 0.7);
                    }

                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                    }

                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.3rem;
                        color: #fff;
                        text-decoration: none;
                    }

                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .nav-link, .footer-link, .hero-secondary {
                        color: #b9b9d0;
                        text-decoration: none;
                    }

                    .nav-link:hover, .footer-link:hover, .hero-secondary:hover {
                        color: #fff;
                    }

                    .hero, .features, .how-it-works, .quiz-section, .footer {
                        position: relative;
                        z-index: 1;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                    }

                    .hero {
                        min-height: 70vh;
                        display: flex;
                        align-items: center;
                    }

                    .hero h1 {
                        font-size: 3.2rem;
                        margin-bottom: 1rem;
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #b9b9d0;
                        max-width: 600px;
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                        margin-top: 2rem;
                    }

                    .hero-cta {
                        padding: 0.9rem 1.8rem;
                        border-radius: 999px;
                        background: #7b5cff;
                        color: #fff;
                        text-decoration: none;
                        font-weight: 600;
                    }

                    .feature-grid, .steps {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                        gap: 1.5rem;
                    }

                    .feature-card, .step {
                        padding: 2rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }

                    .feature-card.visible, .step.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .feature-icon {
                        font-size: 2rem;
                    }

                    .step-number {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #1ec8ff;
                        color: #0f1020;
                        font-weight: 700;
                    }

                    .quiz-card {
                        max-width: 600px;
                        margin: 0 auto;
                        padding: 2rem;
                        border-radius: 20px;
                        background: rgba(255, 255, 255, 0.06);
                    }

                    .quiz-progress {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }

                    .progress-bar {
                        flex: 1;
                        height: 8px;
                        border-radius: 4px;
                        background: rgba(255, 255, 255, 0.1);
                        overflow: hidden;
                    }

                    .progress-fill {
                        height: 100%;
                        background: linear-gradient(90deg, #7b5cff, #1ec8ff);
                        transition: width 0.4s ease;
                    }

                    .progress-text {
                        font-size: 0.9rem;
                        color: #b9b9d0;
                        white-space: nowrap;
                    }

                    .quiz-options {
                        display: grid;
                        gap: 0.75rem;
                    }

                    .quiz-option, .quiz-restart {
                        padding: 0.9rem 1.2rem;
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: transparent;
                        color: inherit;
                        font-size: 1rem;
                        text-align: left;
                        cursor: pointer;
                        transition: background 0.2s ease, border-color 0.2s ease;
                    }

                    .quiz-option:hover {
                        background: rgba(255, 255, 255, 0.06);
                    }

                    .quiz-option.selected {
                        border-color: #7b5cff;
                        background: rgba(123, 92, 255, 0.25);
                    }

                    .footer {
                        text-align: center;
                        padding-top: 2rem;
                    }

                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.2rem;
                        }

                        .nav-right {
                            gap: 0.8rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
