macro_rules! properties {
    (
        $(
            $id:literal =>
            $($prop:ident : $kind:ident $(($min:literal, $max:literal))? = $default:literal),+
        );+
        $(;)?
    ) => {
        use super::{BooleanProperty, IntegerProperty, Property};

        /// The ids of all blocks with registered properties.
        pub(super) const BLOCKS: &[&str] = &[$($id),+];

        pub(super) fn properties(block: &str) -> Option<&'static [Property]> {
            match block {
                $(
                    $id => {
                        const PROPERTIES: &[Property] = &[
                            $(property!($prop: $kind $(($min, $max))? = $default)),+
                        ];
                        Some(PROPERTIES)
                    }
                )+
                _ => None,
            }
        }
    };
}

macro_rules! property {
    ($prop:ident : bool = $default:expr) => {
        Property::Boolean(BooleanProperty::new(stringify!($prop), $default))
    };
    ($prop:ident : int ($min:expr, $max:expr) = $default:expr) => {
        Property::Integer(IntegerProperty::new(
            stringify!($prop),
            $min,
            $max,
            $default,
        ))
    };
}
