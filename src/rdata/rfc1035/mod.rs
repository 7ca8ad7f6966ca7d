//! Record data from [RFC 1035]: initial record types.
//!
//! Only the host address, name server, and mail exchange types are
//! supported.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub use self::a::A;
pub use self::mx::Mx;
pub use self::name::Ns;

mod a;
mod mx;
mod name;
