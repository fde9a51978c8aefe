use crate::entities::{LayerInstance, LayerSolution};
use crate::geometry::primitives::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws a packed layer: the pallet footprint with every placed carton on top, numbered in placement order.
pub fn layer_to_svg(
    instance: &LayerInstance,
    solution: &LayerSolution,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let pallet = instance.pallet.footprint();
    let canvas_height = pallet.h;
    let (p_len, p_wid) = (pallet.w as f32, pallet.h as f32);

    let theme = &options.theme;
    let margin = 0.05 * f32::max(p_len, p_wid);
    let stroke_width = f32::min(p_len, p_wid) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the pallet
        let label_content = format!(
            "length: {} | width: {} | cartons: {} | density: {:.3}% | {}",
            pallet.w,
            pallet.h,
            solution.n_placed(),
            solution.density(instance) * 100.0,
            title,
        );
        let font_size = f32::min(p_len, p_wid) * 0.025;
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw pallet
    let pallet_group = Group::new()
        .set("id", "pallet")
        .add(svg_util::data_to_path(
            svg_util::rect_data(&pallet, canvas_height),
            &[
                ("fill", &*format!("{}", theme.pallet_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "pallet, length: {}, width: {}",
            pallet.w, pallet.h
        )));

    //draw cartons
    let mut cartons_group = Group::new().set("id", "cartons");
    for (i, placement) in solution.placements.iter().enumerate() {
        let rect = placement.rect;
        let fill = match placement.orientation.is_rotated() {
            true => theme.rotated_carton_fill,
            false => theme.carton_fill,
        };

        let mut carton_group = Group::new()
            .set("id", format!("carton_{}", i + 1))
            .add(svg_util::data_to_path(
                svg_util::rect_data(&rect, canvas_height),
                &[
                    ("fill", &*format!("{fill}")),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{stroke_width}")),
                ],
            ))
            .add(Title::new(format!(
                "carton {}, {}, {:?}",
                i + 1,
                rect,
                placement.orientation
            )));

        if options.carton_outlines && instance.spacing > 0 {
            //the footprint is inflated by the spacing, outline the carton itself within it
            let outline = Rect {
                w: rect.w - instance.spacing,
                h: rect.h - instance.spacing,
                ..rect
            };
            carton_group = carton_group.add(svg_util::data_to_path(
                svg_util::rect_data(&outline, canvas_height),
                &[
                    ("fill", "none"),
                    ("stroke", "black"),
                    ("stroke-opacity", "0.6"),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    ("stroke-dasharray", &*format!("{}", 4.0 * stroke_width)),
                ],
            ));
        }

        if options.labels {
            let font_size = f32::min(rect.w as f32, rect.h as f32) * 0.3;
            let center_x = rect.x as f32 + rect.w as f32 / 2.0;
            let center_y = p_wid - (rect.y as f32 + rect.h as f32 / 2.0);
            carton_group = carton_group.add(
                Text::new(format!("{}", i + 1))
                    .set("x", center_x)
                    .set("y", center_y)
                    .set("font-size", font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("fill", format!("{}", theme.label_color)),
            );
        }
        cartons_group = cartons_group.add(carton_group);
    }

    Document::new()
        .set(
            "viewBox",
            (-margin, -2.0 * margin, p_len + 2.0 * margin, p_wid + 3.0 * margin),
        )
        .add(pallet_group)
        .add(cartons_group)
        .add(label)
}
