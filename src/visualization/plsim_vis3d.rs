use bevy::prelude::*;
use bevy::math::primitives::Sphere;

use crate::configuration::config::Config;
use crate::configuration::knobs::Knob;
use crate::simulation::controller::SimulationController;

/// Component tagging each sphere with its particle index into the current snapshot
#[derive(Component)]
struct ParticleIndex(pub usize);

/// World-space → screen-space scaling factor for positions and radii
const SCALE3D: f32 = 50.0;

/// Sphere radius in simulation units
const PARTICLE_RADIUS: f32 = 0.01;

/// Camera distance from the origin, in box sizes
const CAMERA_DISTANCE_BOXES: f32 = 1.25;

/// Camera orbit speed in radians per second
const ORBIT_SPEED: f32 = 1.0;

/// Controller plus the control-panel state around it
#[derive(Resource)]
struct Viewer {
    controller: SimulationController,
    pending: Config,         // edited by the knobs, applied on reset
    knob: Knob,              // knob currently selected for Up/Down
    drawn: Option<u64>,      // generation the spawned spheres belong to
}

/// One material per particle type, rebuilt with the spheres
#[derive(Resource, Default)]
struct TypePalette {
    mesh: Handle<Mesh>,
    materials: Vec<Handle<StandardMaterial>>,
}

#[derive(Component)]
struct OrbitCamera {
    yaw: f32,
}

/// Convenience entrypoint, mirroring `run_headless(controller, ...)`
pub fn run_3d(controller: SimulationController) {
    info!(
        "run_3d: starting Bevy 3D viewer with {} particles",
        controller.snapshot().particle_count
    );
    info!("keys: S start, P stop, R reset, C camera reset, Tab select knob, Up/Down edit, Left/Right orbit");

    let pending = *controller.config();

    App::new()
        .insert_resource(Viewer {
            controller,
            pending,
            knob: Knob::ParticlePopulation,
            drawn: None,
        })
        .init_resource::<TypePalette>()
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (
                control_panel,
                physics_step_3d,
                rebuild_particles,
                sync_transforms_3d,
                draw_box,
                orbit_camera,
            )
                .chain(),
        )
        .run();
}

/// Startup system: spawn the camera; particles are spawned by `rebuild_particles`
fn setup_3d(mut commands: Commands, viewer: Res<Viewer>) {
    let box_size = viewer.controller.config().box_size as f32;

    commands.spawn((
        Camera3dBundle {
            camera: Camera {
                clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
                ..Default::default()
            },
            transform: camera_transform(0.0, box_size),
            ..Default::default()
        },
        OrbitCamera { yaw: 0.0 },
    ));
}

fn camera_transform(yaw: f32, box_size: f32) -> Transform {
    let distance = CAMERA_DISTANCE_BOXES * box_size * SCALE3D;
    let eye = Quat::from_rotation_y(yaw) * Vec3::new(0.0, 0.0, distance);
    Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y)
}

/// Keyboard control panel: Start / Stop / Reset and the parameter knobs
fn control_panel(keys: Res<ButtonInput<KeyCode>>, mut viewer: ResMut<Viewer>) {
    let viewer = &mut *viewer;

    if keys.just_pressed(KeyCode::KeyS) {
        viewer.controller.start();
    }
    if keys.just_pressed(KeyCode::KeyP) {
        viewer.controller.stop();
    }

    if keys.just_pressed(KeyCode::Tab) {
        viewer.knob = viewer.knob.next();
        info!("selected {} = {:.2}", viewer.knob.label(), viewer.knob.get(&viewer.pending));
    }

    let steps = if keys.just_pressed(KeyCode::ArrowUp) {
        1
    } else if keys.just_pressed(KeyCode::ArrowDown) {
        -1
    } else {
        0
    };
    if steps != 0 {
        let value = viewer.pending.nudge(viewer.knob, steps);
        info!("pending {} = {:.2} (press R to apply)", viewer.knob.label(), value);
    }

    if keys.just_pressed(KeyCode::KeyR) {
        if let Err(err) = viewer.controller.reset(viewer.pending) {
            warn!("reset rejected: {err}");
        }
    }
}

/// Per-frame physics: one tick, which steps only while running
fn physics_step_3d(mut viewer: ResMut<Viewer>) {
    viewer.controller.tick();
}

/// Despawn and respawn the spheres whenever the controller swapped generations
fn rebuild_particles(
    mut commands: Commands,
    mut viewer: ResMut<Viewer>,
    mut palette: ResMut<TypePalette>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    spheres: Query<Entity, With<ParticleIndex>>,
) {
    let snapshot = viewer.controller.snapshot();
    if viewer.drawn == Some(snapshot.generation) {
        return;
    }
    let generation = snapshot.generation;

    for entity in &spheres {
        commands.entity(entity).despawn();
    }

    // Hue spread evenly over the types, full saturation, mid lightness
    let m = snapshot.type_count;
    palette.mesh = meshes.add(Sphere::new(PARTICLE_RADIUS * SCALE3D).mesh().uv(8, 8));
    palette.materials = (0..m)
        .map(|i| {
            materials.add(StandardMaterial {
                base_color: Color::hsl(360.0 * i as f32 / m as f32, 1.0, 0.5),
                unlit: true,
                ..Default::default()
            })
        })
        .collect();

    for (i, (x, &t)) in snapshot.positions.iter().zip(snapshot.type_ids).enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: palette.mesh.clone(),
                material: palette.materials[t as usize].clone(),
                transform: Transform::from_xyz(
                    (x.x as f32) * SCALE3D,
                    (x.y as f32) * SCALE3D,
                    (x.z as f32) * SCALE3D,
                ),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }

    viewer.drawn = Some(generation);
}

fn sync_transforms_3d(viewer: Res<Viewer>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    let snapshot = viewer.controller.snapshot();
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(x) = snapshot.positions.get(*i) {
            transform.translation = Vec3::new(
                (x.x as f32) * SCALE3D,
                (x.y as f32) * SCALE3D,
                (x.z as f32) * SCALE3D,
            );
        }
    }
}

/// White wireframe of the simulation box
fn draw_box(viewer: Res<Viewer>, mut gizmos: Gizmos) {
    let side = viewer.controller.config().box_size as f32 * SCALE3D;
    gizmos.cuboid(Transform::from_scale(Vec3::splat(side)), Color::WHITE);
}

/// Left/Right orbit around the box, C puts the camera back where it started
fn orbit_camera(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    viewer: Res<Viewer>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let box_size = viewer.controller.config().box_size as f32;

    for (mut orbit, mut transform) in &mut cameras {
        if keys.just_pressed(KeyCode::KeyC) {
            orbit.yaw = 0.0;
        }
        if keys.pressed(KeyCode::ArrowLeft) {
            orbit.yaw -= ORBIT_SPEED * time.delta_seconds();
        }
        if keys.pressed(KeyCode::ArrowRight) {
            orbit.yaw += ORBIT_SPEED * time.delta_seconds();
        }
        *transform = camera_transform(orbit.yaw, box_size);
    }
}
