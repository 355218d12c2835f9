use std::borrow::Cow;
use std::sync::OnceLock;

use propdoc::prop::{Angles, Mat3, PropertyAccessor, PropertyHost, PropertyInfo, PropertySignals, Variant, VariantType, Vec3};

/// Physics spring joint component.
pub struct SpringJoint {
	local_axis: Mat3,
	anchor: Vec3,
	enable_limit_distances: bool,
	min_distance: f32,
	max_distance: f32,
	stiffness: f32,
	damping: f32,
	signals: PropertySignals,
}

impl Default for SpringJoint {
	fn default() -> Self {
		Self {
			local_axis: Mat3::identity(),
			anchor: Vec3::ZERO,
			enable_limit_distances: false,
			min_distance: 0.0,
			max_distance: 0.0,
			stiffness: 30.0,
			damping: 0.2,
			signals: PropertySignals::new(),
		}
	}
}

/// `angles` is stored as the joint's local axis matrix.
struct AxisAngles;

impl PropertyAccessor<SpringJoint> for AxisAngles {
	fn get(&self, host: &SpringJoint) -> Variant {
		Variant::Angles(host.local_axis.to_angles())
	}

	fn set(&self, host: &mut SpringJoint, value: &Variant) {
		host.local_axis = value.get_or_default::<Angles>().to_mat3();
	}
}

impl PropertyHost for SpringJoint {
	fn property_infos(&self) -> Cow<'static, [PropertyInfo<Self>]> {
		static INFOS: OnceLock<Vec<PropertyInfo<SpringJoint>>> = OnceLock::new();
		Cow::Borrowed(INFOS.get_or_init(|| {
			vec![
				PropertyInfo::field("anchor", |j: &SpringJoint| &j.anchor, |j: &mut SpringJoint| &mut j.anchor)
					.label("Anchor")
					.description("Joint position in local space")
					.build(),
				PropertyInfo::accessor("angles", VariantType::Angles, &AxisAngles)
					.label("Angles")
					.description("Joint frame as yaw, pitch, roll in degrees")
					.build(),
				PropertyInfo::field(
					"enableLimitDistances",
					|j: &SpringJoint| &j.enable_limit_distances,
					|j: &mut SpringJoint| &mut j.enable_limit_distances,
				)
				.label("Enable Limit Distances")
				.build(),
				PropertyInfo::field("minDistance", |j: &SpringJoint| &j.min_distance, |j: &mut SpringJoint| &mut j.min_distance)
					.label("Minimum Distance")
					.range(0.0, 1.0e8)
					.build(),
				PropertyInfo::field("maxDistance", |j: &SpringJoint| &j.max_distance, |j: &mut SpringJoint| &mut j.max_distance)
					.label("Maximum Distance")
					.range(0.0, 1.0e8)
					.build(),
				PropertyInfo::field("stiffness", |j: &SpringJoint| &j.stiffness, |j: &mut SpringJoint| &mut j.stiffness)
					.label("Stiffness")
					.default(30.0_f32)
					.range(0.0, 1.0e6)
					.build(),
				PropertyInfo::field("damping", |j: &SpringJoint| &j.damping, |j: &mut SpringJoint| &mut j.damping)
					.label("Damping")
					.default(0.2_f32)
					.range(0.0, 1.0)
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
