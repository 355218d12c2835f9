use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::OnceLock;

use crate::prop::{PropertyAccessor, PropertyEvent, PropertyHost, PropertyInfo, PropertySignals, Variant, VariantType, Vec3};

/// Small host covering every storage kind and flag.
pub(crate) struct Mover {
	pub speed: f32,
	pub path: Vec<Vec3>,
	pub serial: i32,
	pub scratch: f32,
	pub label: String,
	pub stops: Vec<i32>,
	pub laps: i32,
	pub gear: i32,
	pub limits: Vec<f32>,
	/// Calls to `property_infos`.
	pub lookups: Cell<usize>,
	signals: PropertySignals,
}

impl Default for Mover {
	fn default() -> Self {
		Self {
			speed: 10.0,
			path: Vec::new(),
			serial: 7,
			scratch: 0.0,
			label: String::new(),
			stops: Vec::new(),
			laps: 1,
			gear: 1,
			limits: Vec::new(),
			lookups: Cell::new(0),
			signals: PropertySignals::new(),
		}
	}
}

struct HalfSpeed;

impl PropertyAccessor<Mover> for HalfSpeed {
	fn get(&self, host: &Mover) -> Variant {
		Variant::Float(host.speed / 2.0)
	}

	fn set(&self, host: &mut Mover, value: &Variant) {
		host.speed = value.get_or_default::<f32>() * 2.0;
	}
}

struct Stops;

impl PropertyAccessor<Mover> for Stops {
	fn get(&self, _host: &Mover) -> Variant {
		Variant::None
	}

	fn set(&self, _host: &mut Mover, _value: &Variant) {}

	fn get_element(&self, host: &Mover, index: usize) -> Variant {
		host.stops.get(index).copied().map_or(Variant::None, Variant::Int)
	}

	fn set_element(&self, host: &mut Mover, index: usize, value: &Variant) {
		if let Some(slot) = host.stops.get_mut(index) {
			*slot = value.get_or_default();
		}
	}

	fn count(&self, host: &Mover) -> usize {
		host.stops.len()
	}

	fn set_count(&self, host: &mut Mover, count: usize) {
		host.stops.resize(count, -1);
	}
}

impl PropertyHost for Mover {
	fn property_infos(&self) -> Cow<'static, [PropertyInfo<Self>]> {
		self.lookups.set(self.lookups.get() + 1);
		static INFOS: OnceLock<Vec<PropertyInfo<Mover>>> = OnceLock::new();
		Cow::Borrowed(INFOS.get_or_init(|| {
			vec![
				PropertyInfo::field("speed", |m: &Mover| &m.speed, |m: &mut Mover| &mut m.speed)
					.default(10.0_f32)
					.range(0.0, 100.0)
					.build(),
				PropertyInfo::array("path", |m: &Mover| &m.path, |m: &mut Mover| &mut m.path).build(),
				PropertyInfo::field("serial", |m: &Mover| &m.serial, |m: &mut Mover| &mut m.serial)
					.default(7)
					.read_only()
					.build(),
				PropertyInfo::field("scratch", |m: &Mover| &m.scratch, |m: &mut Mover| &mut m.scratch)
					.skip_serialization()
					.build(),
				PropertyInfo::field("label", |m: &Mover| &m.label, |m: &mut Mover| &mut m.label).build(),
				PropertyInfo::accessor("halfSpeed", VariantType::Float, &HalfSpeed)
					.skip_serialization()
					.build(),
				PropertyInfo::accessor("stops", VariantType::Int, &Stops).array().build(),
				PropertyInfo::field("laps", |m: &Mover| &m.laps, |m: &mut Mover| &mut m.laps)
					.default(1)
					.range(0.0, 1000.0)
					.build(),
				PropertyInfo::field("gear", |m: &Mover| &m.gear, |m: &mut Mover| &mut m.gear)
					.default(1)
					.range(1.0, 6.0)
					.read_only()
					.build(),
				PropertyInfo::array("limits", |m: &Mover| &m.limits, |m: &mut Mover| &mut m.limits)
					.default(25.0_f32)
					.range(0.0, 50.0)
					.read_only()
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

/// Capture every event `host` emits from now on.
pub(crate) fn record(host: &mut impl PropertyHost) -> Rc<RefCell<Vec<PropertyEvent>>> {
	let log = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&log);
	host.signals_mut().connect(move |event| sink.borrow_mut().push(event.clone()));
	log
}

pub(crate) fn changed(name: &str, element: Option<usize>) -> PropertyEvent {
	PropertyEvent::Changed {
		name: name.to_owned(),
		element,
	}
}

pub(crate) fn count_changed(name: &str) -> PropertyEvent {
	PropertyEvent::ArrayCountChanged { name: name.to_owned() }
}
