use bitflags::bitflags;
use scratchwin_core::{
    Coord2, DrawingSurface, PointerInput, PointerSample, PrizeOutcome, RevealConfig, RevealWidget,
    SurfaceRect,
};
use serde::{Deserialize, Serialize};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::surface::CanvasSurface;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Begin(PointerSample),
    Continue(PointerSample),
    End,
}

impl Msg {
    /// Mouse motion keeps scratching only while the primary button is held; a release that
    /// happened outside the canvas ends the drag on the next move.
    fn from_mouse_move(buttons: MouseButtons, sample: Option<PointerSample>) -> Option<Self> {
        if buttons.contains(MouseButtons::LEFT) {
            sample.map(Self::Continue)
        } else {
            Some(Self::End)
        }
    }
}

fn surface_rect(canvas: &HtmlCanvasElement) -> SurfaceRect {
    let rect = canvas.get_bounding_client_rect();
    SurfaceRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn mouse_sample(canvas: &NodeRef, e: &MouseEvent, size: Coord2) -> Option<PointerSample> {
    let canvas = canvas.cast::<HtmlCanvasElement>()?;
    PointerInput::Mouse {
        client_x: e.client_x().into(),
        client_y: e.client_y().into(),
    }
    .sample(&surface_rect(&canvas), size)
}

fn touch_sample(canvas: &NodeRef, e: &TouchEvent, size: Coord2) -> Option<PointerSample> {
    let canvas = canvas.cast::<HtmlCanvasElement>()?;
    let contact = e
        .touches()
        .get(0)
        .map(|touch| (touch.client_x().into(), touch.client_y().into()));
    PointerInput::Touch(contact).sample(&surface_rect(&canvas), size)
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ScratchCardProps {
    pub prize: PrizeOutcome,
    pub config: RevealConfig,
}

#[derive(Debug)]
pub(crate) struct ScratchCard {
    widget: RevealWidget<CanvasSurface>,
    canvas: NodeRef,
}

impl ScratchCard {
    fn new_widget(props: &ScratchCardProps) -> RevealWidget<CanvasSurface> {
        let surface = CanvasSurface::new(props.config.size);
        RevealWidget::with_surface(surface, props.prize.clone(), props.config)
    }

    fn attach_canvas(&mut self) {
        match self.canvas.cast::<HtmlCanvasElement>() {
            Some(canvas) => self.widget.surface_mut().attach(&canvas),
            None => log::warn!("scratch canvas is not mounted"),
        }
    }
}

impl Component for ScratchCard {
    type Message = Msg;
    type Properties = ScratchCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            widget: Self::new_widget(ctx.props()),
            canvas: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.config != old_props.config {
            log::debug!("reveal config changed, rebuilding surface");
            self.widget = Self::new_widget(props);
            self.attach_canvas();
            true
        } else {
            self.widget.set_prize(props.prize.clone()).has_update()
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let was_revealed = self.widget.is_revealed();
        let outcome = match msg {
            Begin(sample) => self.widget.begin_erase(sample),
            Continue(sample) => self.widget.continue_erase(sample),
            End => self.widget.end_erase(),
        };
        log::trace!("{:?} -> {:?}", msg, outcome);

        // Scratching is drawn straight onto the canvas; only the reveal changes the markup.
        outcome.has_update() && was_revealed != self.widget.is_revealed()
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.attach_canvas();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let prize = self.widget.prize();
        let size = self.widget.surface().size();
        let (width, height) = size;
        let revealed = self.widget.is_revealed();

        let onmousedown = {
            let canvas = self.canvas.clone();
            ctx.link().batch_callback(move |e: MouseEvent| {
                let buttons = MouseButtons::from_bits_truncate(e.buttons());
                if !buttons.contains(MouseButtons::LEFT) {
                    return None;
                }
                mouse_sample(&canvas, &e, size).map(Msg::Begin)
            })
        };
        let onmousemove = {
            let canvas = self.canvas.clone();
            ctx.link().batch_callback(move |e: MouseEvent| {
                let buttons = MouseButtons::from_bits_truncate(e.buttons());
                Msg::from_mouse_move(buttons, mouse_sample(&canvas, &e, size))
            })
        };
        let onmouseup = ctx.link().callback(|_: MouseEvent| Msg::End);
        let onmouseleave = ctx.link().callback(|_: MouseEvent| Msg::End);

        let ontouchstart = {
            let canvas = self.canvas.clone();
            ctx.link().batch_callback(move |e: TouchEvent| {
                e.prevent_default();
                touch_sample(&canvas, &e, size).map(Msg::Begin)
            })
        };
        let ontouchmove = {
            let canvas = self.canvas.clone();
            ctx.link().batch_callback(move |e: TouchEvent| {
                e.prevent_default();
                touch_sample(&canvas, &e, size).map(Msg::Continue)
            })
        };
        let ontouchend = ctx.link().callback(|e: TouchEvent| {
            e.prevent_default();
            Msg::End
        });
        let ontouchcancel = ctx.link().callback(|_: TouchEvent| Msg::End);

        html! {
            <div class="scratch-card">
                <div class={classes!("scratch-area", prize.is_consolation().then_some("consolation"))}>
                    <div class="prize">
                        <div class="glyph">{prize.glyph()}</div>
                        <div class="label">{prize.label()}</div>
                    </div>
                    <canvas
                        ref={self.canvas.clone()}
                        width={width.to_string()}
                        height={height.to_string()}
                        style="touch-action: none"
                        class={classes!(revealed.then_some("revealed"))}
                        {onmousedown}
                        {onmousemove}
                        {onmouseup}
                        {onmouseleave}
                        {ontouchstart}
                        {ontouchmove}
                        {ontouchend}
                        {ontouchcancel}
                    />
                </div>
                if revealed {
                    <article class="congrats">
                        <h3>{"🎉 Congratulations!"}</h3>
                        <p>{format!("You won: {}", prize.label())}</p>
                    </article>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_move_continues_only_with_primary_button() {
        let sample = Some(PointerSample::new(10.0, 20.0));

        assert_eq!(
            Msg::from_mouse_move(MouseButtons::LEFT, sample),
            Some(Msg::Continue(PointerSample::new(10.0, 20.0)))
        );
        assert_eq!(
            Msg::from_mouse_move(MouseButtons::LEFT | MouseButtons::RIGHT, sample),
            Some(Msg::Continue(PointerSample::new(10.0, 20.0)))
        );
        assert_eq!(Msg::from_mouse_move(MouseButtons::LEFT, None), None);
    }

    #[test]
    fn mouse_move_without_buttons_ends_the_drag() {
        let sample = Some(PointerSample::new(10.0, 20.0));

        assert_eq!(
            Msg::from_mouse_move(MouseButtons::empty(), sample),
            Some(Msg::End)
        );
        assert_eq!(
            Msg::from_mouse_move(MouseButtons::RIGHT, None),
            Some(Msg::End)
        );
    }
}
