#![allow(missing_docs)]

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

use propdoc::prop::{
	FieldSlot, PropertyEvent, PropertyHost, PropertyHostExt, PropertyId, PropertyInfo, PropertySignals, Variant, VariantType, Vec2, deserialize, serialize,
};
use serde_json::json;

/// Host with a fixed `name` property plus editor-added user properties.
#[derive(Default)]
struct Scripted {
	name: String,
	user: BTreeMap<String, (VariantType, Variant)>,
	signals: PropertySignals,
}

struct UserSlot {
	key: String,
}

impl FieldSlot<Scripted> for UserSlot {
	fn load(&self, host: &Scripted) -> Variant {
		host.user.get(&self.key).map(|(_, value)| value.clone()).unwrap_or_default()
	}

	fn store(&self, host: &mut Scripted, value: Variant) -> bool {
		match host.user.get_mut(&self.key) {
			Some((ty, slot)) if *ty == value.ty() => {
				*slot = value;
				true
			}
			_ => false,
		}
	}
}

impl Scripted {
	fn add_user_property(&mut self, key: &str, ty: VariantType) {
		self.user.insert(key.to_owned(), (ty, ty.zero_value()));
		self.notify_property_info_updated();
	}
}

fn fixed_infos() -> &'static [PropertyInfo<Scripted>] {
	static INFOS: OnceLock<Vec<PropertyInfo<Scripted>>> = OnceLock::new();
	INFOS.get_or_init(|| vec![PropertyInfo::field("name", |s: &Scripted| &s.name, |s: &mut Scripted| &mut s.name).build()])
}

impl PropertyHost for Scripted {
	fn property_infos(&self) -> Cow<'static, [PropertyInfo<Self>]> {
		if self.user.is_empty() {
			return Cow::Borrowed(fixed_infos());
		}
		let mut infos = fixed_infos().to_vec();
		for (key, (ty, _)) in &self.user {
			let slot: Arc<dyn FieldSlot<Scripted>> = Arc::new(UserSlot { key: key.clone() });
			infos.push(PropertyInfo::slot(key.clone(), *ty, slot).build());
		}
		Cow::Owned(infos)
	}

	fn signals(&self) -> &PropertySignals {
		&self.signals
	}

	fn signals_mut(&mut self) -> &mut PropertySignals {
		&mut self.signals
	}
}

fn record(host: &mut Scripted) -> Rc<RefCell<Vec<PropertyEvent>>> {
	let log = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&log);
	host.signals_mut().connect(move |event| sink.borrow_mut().push(event.clone()));
	log
}

#[test]
fn user_properties_extend_the_descriptor_list() {
	let mut host = Scripted::default();
	let events = record(&mut host);

	host.add_user_property("offset", VariantType::Vec2);
	assert_eq!(*events.borrow(), vec![PropertyEvent::InfoUpdated]);

	assert_eq!(host.property_infos().len(), 2);
	assert_eq!(host.property("offset"), Variant::Vec2(Vec2::default()));
	assert!(host.set_property("offset", Vec2::new(3.0, 4.0)));
	assert_eq!(host.property(PropertyId::Index(1)), Variant::Vec2(Vec2::new(3.0, 4.0)));
}

#[test]
fn user_properties_round_trip_through_documents() {
	let mut source = Scripted::default();
	source.add_user_property("health", VariantType::Int);
	source.add_user_property("tint", VariantType::Color3);
	assert!(source.set_property("name", "crate"));
	assert!(source.set_property("health", 75));
	assert!(!source.set_property("tint", "0.5 0.5 1"), "text is not a color");

	let tree = serialize(&source);
	assert_eq!(tree, json!({ "name": "crate", "health": 75, "tint": "0 0 0" }));

	let mut target = Scripted::default();
	target.add_user_property("health", VariantType::Int);
	target.add_user_property("tint", VariantType::Color3);
	deserialize(&tree, &mut target);
	assert_eq!(target.property("name"), Variant::Str("crate".to_owned()));
	assert_eq!(target.property("health"), Variant::Int(75));
}

#[test]
fn removed_user_properties_disappear() {
	let mut host = Scripted::default();
	host.add_user_property("flag", VariantType::Bool);
	assert!(host.set_property("flag", true));

	host.user.remove("flag");
	host.notify_property_info_updated();
	assert_eq!(host.property("flag"), Variant::None);
	assert!(!host.set_property("flag", false));
	assert!(host.property_info("flag").is_none());
}
