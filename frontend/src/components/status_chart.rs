use yew::prelude::*;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;

use crate::domain::reports::ChartBar;

const CANVAS_WIDTH: u32 = 760;
const CANVAS_HEIGHT: u32 = 340;

#[derive(Properties, PartialEq)]
pub struct StatusChartProps {
    pub bars: Vec<ChartBar>,
    #[prop_or_default]
    pub loading: bool,
}

pub enum Msg {
    Redraw,
}

/// Bar chart of surgeries per status, drawn on a canvas
pub struct StatusChart {
    canvas_ref: NodeRef,
}

impl Component for StatusChart {
    type Message = Msg;
    type Properties = StatusChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Redraw => {
                self.draw_chart(&ctx.props().bars);
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().bars != old_props.bars {
            self.draw_chart(&ctx.props().bars);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().bars.is_empty() {
            self.draw_chart(&ctx.props().bars);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let total: u64 = props.bars.iter().map(|bar| bar.count).sum();
        let redraw = ctx.link().callback(|_| Msg::Redraw);

        html! {
            <div class="chart-container">
                <div class="chart-title-header">
                    <h3 class="chart-title">{"Cirugías por estado"}</h3>
                    <button class="btn btn-link" onclick={redraw}>{"↻"}</button>
                </div>
                {if props.loading {
                    html! { <div class="chart-placeholder">{"Cargando gráfico..."}</div> }
                } else if total == 0 {
                    html! { <div class="chart-placeholder">{"Sin cirugías registradas"}</div> }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            width={CANVAS_WIDTH.to_string()}
                            height={CANVAS_HEIGHT.to_string()}
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl StatusChart {
    fn draw_chart(&self, bars: &[ChartBar]) {
        if bars.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let labels: Vec<String> = bars.iter().map(|bar| bar.label().to_string()).collect();
        let max_count = bars.iter().map(|bar| bar.count).max().unwrap_or(0);
        // headroom above the tallest bar
        let y_max = max_count + (max_count / 10).max(1);

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(50)
            .build_cartesian_2d((0u32..bars.len() as u32).into_segmented(), 0u64..y_max)
        {
            Ok(chart) => chart,
            Err(e) => {
                log::warn!("Could not build the status chart: {:?}", e);
                return;
            }
        };

        let label_for = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(index) => labels.get(*index as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Cirugías")
            .x_labels(bars.len())
            .x_label_formatter(&label_for)
            .y_label_formatter(&|v| format!("{}", v))
            .label_style(("sans-serif", 12, &RGBColor(55, 65, 81)))
            .axis_style(&RGBColor(220, 220, 220))
            .bold_line_style(&RGBColor(240, 240, 240))
            .draw()
            .is_err()
        {
            return;
        }

        let bar_color = RGBColor(37, 99, 235);
        if chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(bar_color.filled())
                    .margin(14)
                    .data(bars.iter().enumerate().map(|(index, bar)| (index as u32, bar.count))),
            )
            .is_err()
        {
            return;
        }

        let _ = root.present();
    }
}
