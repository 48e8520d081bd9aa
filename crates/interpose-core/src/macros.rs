//! Declaration macros for capability interfaces and components.

/// Declare a capability interface.
///
/// Generates a marker type carrying the interface description and the
/// unmarshalling dispatcher, a typed trait, and an implementation of that
/// trait for `dyn Component` so wrapped and unwrapped targets are called the
/// same way. `fn key as "name"(..)` declares an overload sharing `name`.
///
/// ```rust
/// use interpose_core::{capability, component, InterposeResult, Target};
/// use std::sync::Arc;
///
/// capability! {
///     /// Says hello.
///     pub interface Greeter: GreeterApi {
///         /// Greet someone.
///         fn greet(who: String) -> String;
///         /// Greet someone several times.
///         fn greet_times as "greet"(who: String, times: i64) -> String;
///     }
/// }
///
/// struct Plain;
///
/// impl GreeterApi for Plain {
///     fn greet(&self, who: String) -> InterposeResult<String> {
///         Ok(format!("hello {who}"))
///     }
///
///     fn greet_times(&self, who: String, times: i64) -> InterposeResult<String> {
///         Ok(format!("hello {who} x{times}"))
///     }
/// }
///
/// component!(Plain: Greeter);
///
/// let target: Target = Arc::new(Plain);
/// assert_eq!(target.greet("bob".into()).unwrap(), "hello bob");
/// ```
#[macro_export]
macro_rules! capability {
    (
        $(#[$meta:meta])*
        $vis:vis interface $iface:ident : $api:ident {
            $(
                $(#[$mmeta:meta])*
                fn $m:ident $(as $alias:literal)? ( $($p:ident : $t:ty),* $(,)? ) -> $r:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis struct $iface;

        impl $iface {
            /// Static description of this interface.
            pub const INTERFACE: &'static $crate::Interface = &$crate::Interface {
                path: ::core::module_path!(),
                name: ::core::stringify!($iface),
                methods: &[
                    $(
                        $crate::Method {
                            name: $crate::__capability_method_name!($m $(, $alias)?),
                            key: ::core::stringify!($m),
                            params: &[$(<$t as $crate::Arg>::KIND),*],
                            returns: <$r as $crate::Arg>::KIND,
                        },
                    )*
                ],
            };

            /// Unmarshal a call and run it on a typed implementation.
            ///
            /// # Errors
            ///
            /// Returns the implementation's error, or a call-shape error if
            /// the method or arguments do not belong to this interface.
            #[allow(unused_mut, unused_variables)]
            pub fn dispatch<T>(
                target: &T,
                method: $crate::MethodRef,
                args: &[$crate::Value],
            ) -> $crate::InterposeResult<$crate::Value>
            where
                T: $api + ?Sized,
            {
                $(
                    if method.method.key == ::core::stringify!($m) {
                        let mut reader = $crate::ArgReader::new(method, args)?;
                        $( let $p: $t = reader.next::<$t>()?; )*
                        return <T as $api>::$m(target, $($p),*).map($crate::Arg::into_value);
                    }
                )*
                Err($crate::InterposeError::UnknownMethod {
                    interface: ::core::stringify!($iface).to_owned(),
                    method: method.method.name.to_owned(),
                    params: $crate::join_kinds(method.method.params),
                })
            }
        }

        #[doc = ::core::concat!("Typed calls on [`", ::core::stringify!($iface), "`].")]
        $vis trait $api: Send + Sync {
            $(
                $(#[$mmeta])*
                fn $m(&self, $($p: $t),*) -> $crate::InterposeResult<$r>;
            )*
        }

        impl $api for dyn $crate::Component {
            $(
                fn $m(&self, $($p: $t),*) -> $crate::InterposeResult<$r> {
                    let method =
                        $crate::MethodRef::by_key($iface::INTERFACE, ::core::stringify!($m))?;
                    let value = self.invoke(method, &[$($crate::Arg::into_value($p)),*])?;
                    $crate::returned::<$r>(method, &value)
                }
            )*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __capability_method_name {
    ($m:ident) => {
        ::core::stringify!($m)
    };
    ($m:ident, $alias:literal) => {
        $alias
    };
}

/// Implement [`Component`](crate::Component) for a type that implements the
/// typed traits of the listed interfaces.
///
/// Calls on any other interface fail with
/// [`InterposeError::UnsupportedInterface`](crate::InterposeError::UnsupportedInterface).
#[macro_export]
macro_rules! component {
    ($ty:ty : $($iface:ty),+ $(,)?) => {
        impl $crate::Component for $ty {
            fn interfaces(&self) -> &[&'static $crate::Interface] {
                const INTERFACES: &[&'static $crate::Interface] = &[$(<$iface>::INTERFACE),+];
                INTERFACES
            }

            fn invoke(
                &self,
                method: $crate::MethodRef,
                args: &[$crate::Value],
            ) -> $crate::InterposeResult<$crate::Value> {
                $(
                    if method.interface.same_as(<$iface>::INTERFACE) {
                        return <$iface>::dispatch(self, method, args);
                    }
                )+
                Err($crate::unsupported($crate::Component::name(self), method))
            }
        }
    };
}
