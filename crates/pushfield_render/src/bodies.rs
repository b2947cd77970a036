use bevy::math::Isometry2d;
use bevy::prelude::*;
use pushfield_core::{Palette, DIRECTION_MARKER_LEN, POINTER_MARKER_RADIUS};
use pushfield_sim::pipeline::LatestFrame;
use pushfield_sim::simulation::Simulation;

use super::camera::world_to_scene;

/// Draw the latest frame as outlines: field, pointer, bodies, and a short line from each
/// in-field body toward the field center.
///
/// Gizmos only live for one display frame, so this runs every frame even when the
/// simulation didn't tick.
pub fn draw_frame(latest: Res<LatestFrame>, sim: Res<Simulation>, mut gizmos: Gizmos) {
    let frame = &latest.0;
    let world = Vec2::new(sim.config.world_width, sim.config.world_height);

    gizmos.circle_2d(
        Isometry2d::from_translation(world_to_scene(frame.pointer, world)),
        POINTER_MARKER_RADIUS,
        palette_color(Palette::Pointer),
    );

    let Some(field) = frame.field else {
        return;
    };
    gizmos.circle_2d(
        Isometry2d::from_translation(world_to_scene(field.position, world)),
        field.radius,
        palette_color(Palette::Field),
    );

    for body in &frame.bodies {
        let center = world_to_scene(body.position, world);

        if body.in_field {
            let toward_center =
                (field.position - body.position).set_magnitude(DIRECTION_MARKER_LEN);
            gizmos.line_2d(
                center,
                world_to_scene(body.position + toward_center, world),
                palette_color(Palette::Direction),
            );
        }

        let color = if body.in_field { Palette::InField } else { body.color };
        gizmos.circle_2d(
            Isometry2d::from_translation(center),
            body.radius,
            palette_color(color),
        );
    }
}

fn palette_color(p: Palette) -> Color {
    let c = p.color();
    Color::srgba(c[0], c[1], c[2], c[3])
}
