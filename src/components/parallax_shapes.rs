use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::effects::parallax::LayerTransform;

#[derive(Properties, PartialEq)]
pub struct ParallaxShapesProps {
    pub count: usize,
    pub speed_step: f64,
    pub rotation_factor: f64,
}

/// Decorative background shapes. Re-renders on every window scroll with the
/// transform for the current offset; there is no throttling.
#[function_component(ParallaxShapes)]
pub fn parallax_shapes(props: &ParallaxShapesProps) -> Html {
    let (_, scroll_y) = use_window_scroll();

    html! {
        <div class="floating-shapes" aria-hidden="true">
            { for (0..props.count).map(|i| {
                let transform = LayerTransform::at(i, scroll_y, props.speed_step, props.rotation_factor);
                html! {
                    <div
                        class={classes!("floating-shape", format!("shape-{}", i % 4 + 1))}
                        style={format!("transform: {};", transform)}
                    />
                }
            }) }
        </div>
    }
}
