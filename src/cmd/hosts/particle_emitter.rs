use std::borrow::Cow;
use std::sync::OnceLock;

use propdoc::prop::{Color4, Guid, MinMaxCurve, Point, PropertyHost, PropertyInfo, PropertySignals, Quat, Rect};

const EMITTER_GUID: Guid = Guid::from_u128(0x6f1c_2d4e_8a3b_4c5d_9e7f_0a1b_2c3d_4e5f);

const SIMULATION_SPACES: &[&str] = &["Local", "Global"];

/// Particle emitter component.
pub struct ParticleEmitter {
	guid: Guid,
	duration: f32,
	looping: bool,
	max_particles: i32,
	simulation_space: i32,
	start_lifetime: MinMaxCurve,
	start_color: Color4,
	rotation: Quat,
	spawn_area: Rect,
	pivot: Point,
	color_keys: Vec<Color4>,
	burst_times: Vec<f32>,
	random_seed: i32,
	signals: PropertySignals,
}

impl Default for ParticleEmitter {
	fn default() -> Self {
		Self {
			guid: EMITTER_GUID,
			duration: 5.0,
			looping: true,
			max_particles: 1000,
			simulation_space: 0,
			start_lifetime: MinMaxCurve::constant(5.0),
			start_color: Color4::WHITE,
			rotation: Quat::IDENTITY,
			spawn_area: Rect::new(0, 0, 64, 64),
			pivot: Point::default(),
			color_keys: Vec::new(),
			burst_times: Vec::new(),
			random_seed: 0,
			signals: PropertySignals::new(),
		}
	}
}

impl PropertyHost for ParticleEmitter {
	fn property_infos(&self) -> Cow<'static, [PropertyInfo<Self>]> {
		static INFOS: OnceLock<Vec<PropertyInfo<ParticleEmitter>>> = OnceLock::new();
		Cow::Borrowed(INFOS.get_or_init(|| {
			vec![
				PropertyInfo::field("guid", |e: &ParticleEmitter| &e.guid, |e: &mut ParticleEmitter| &mut e.guid)
					.default(EMITTER_GUID)
					.read_only()
					.build(),
				PropertyInfo::field("duration", |e: &ParticleEmitter| &e.duration, |e: &mut ParticleEmitter| &mut e.duration)
					.default(5.0_f32)
					.range(0.01, 1000.0)
					.label("Duration")
					.build(),
				PropertyInfo::field("looping", |e: &ParticleEmitter| &e.looping, |e: &mut ParticleEmitter| &mut e.looping)
					.default(true)
					.label("Looping")
					.build(),
				PropertyInfo::field("maxParticles", |e: &ParticleEmitter| &e.max_particles, |e: &mut ParticleEmitter| &mut e.max_particles)
					.default(1000)
					.range(1.0, 10000.0)
					.label("Max Particles")
					.build(),
				PropertyInfo::field(
					"simulationSpace",
					|e: &ParticleEmitter| &e.simulation_space,
					|e: &mut ParticleEmitter| &mut e.simulation_space,
				)
				.enum_names(SIMULATION_SPACES)
				.label("Simulation Space")
				.build(),
				PropertyInfo::field("startLifetime", |e: &ParticleEmitter| &e.start_lifetime, |e: &mut ParticleEmitter| &mut e.start_lifetime)
					.default(MinMaxCurve::constant(5.0))
					.label("Start Lifetime")
					.build(),
				PropertyInfo::field("startColor", |e: &ParticleEmitter| &e.start_color, |e: &mut ParticleEmitter| &mut e.start_color)
					.default(Color4::WHITE)
					.range(0.0, 1.0)
					.label("Start Color")
					.build(),
				PropertyInfo::field("rotation", |e: &ParticleEmitter| &e.rotation, |e: &mut ParticleEmitter| &mut e.rotation)
					.default(Quat::IDENTITY)
					.build(),
				PropertyInfo::field("spawnArea", |e: &ParticleEmitter| &e.spawn_area, |e: &mut ParticleEmitter| &mut e.spawn_area)
					.default(Rect::new(0, 0, 64, 64))
					.label("Spawn Area")
					.build(),
				PropertyInfo::field("pivot", |e: &ParticleEmitter| &e.pivot, |e: &mut ParticleEmitter| &mut e.pivot).build(),
				PropertyInfo::array("colorKeys", |e: &ParticleEmitter| &e.color_keys, |e: &mut ParticleEmitter| &mut e.color_keys)
					.default(Color4::WHITE)
					.range(0.0, 1.0)
					.label("Color Keys")
					.build(),
				PropertyInfo::array("burstTimes", |e: &ParticleEmitter| &e.burst_times, |e: &mut ParticleEmitter| &mut e.burst_times)
					.range(0.0, 1000.0)
					.label("Burst Times")
					.build(),
				PropertyInfo::field("randomSeed", |e: &ParticleEmitter| &e.random_seed, |e: &mut ParticleEmitter| &mut e.random_seed)
					.skip_serialization()
					.description("Per-run seed, never saved")
					.build(),
			]
		}))
	}

	fn signals(&self) -> &PropertySignals {
		&self.signals
	}

	fn signals_mut(&mut self) -> &mut PropertySignals {
		&mut self.signals
	}
}
