mod particle_emitter;
mod spring_joint;

/// Particle emitter demo host.
pub use particle_emitter::ParticleEmitter;
/// Spring joint demo host.
pub use spring_joint::SpringJoint;

/// Built-in host types the CLI can instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HostKind {
	/// Physics spring joint with an accessor-backed `angles` property.
	SpringJoint,
	/// Particle emitter with arrays, a curve, and protected properties.
	ParticleEmitter,
}

impl HostKind {
	/// Name used on the command line and in JSON output.
	pub fn name(self) -> &'static str {
		match self {
			Self::SpringJoint => "spring-joint",
			Self::ParticleEmitter => "particle-emitter",
		}
	}
}

/// Run `$body` with `$host` bound to a default-constructed host of `$kind`.
macro_rules! with_host {
	($kind:expr, |$host:ident| $body:expr) => {
		match $kind {
			$crate::cmd::hosts::HostKind::SpringJoint => {
				#[allow(unused_mut)]
				let mut $host = $crate::cmd::hosts::SpringJoint::default();
				$body
			}
			$crate::cmd::hosts::HostKind::ParticleEmitter => {
				#[allow(unused_mut)]
				let mut $host = $crate::cmd::hosts::ParticleEmitter::default();
				$body
			}
		}
	};
}

pub(crate) use with_host;
