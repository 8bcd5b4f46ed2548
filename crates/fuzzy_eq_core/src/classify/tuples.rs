use crate::traits::{erase, Capabilities, Comparable, Fields, Inspect};

macro_rules! tuple {
    ($($name:ident . $index:tt),*) => {
        impl<$($name: Comparable),*> Inspect for ($($name,)*) {
            fn fields(&self) -> Option<Fields<'_>> {
                Some(vec![$(erase(&self.$index)),*])
            }
        }

        impl<$($name: Comparable),*> Comparable for ($($name,)*) {
            const CAPABILITIES: Capabilities = Capabilities::TUPLE;
        }
    };
}

tuple!();
tuple!(A.0);
tuple!(A.0, B.1);
tuple!(A.0, B.1, C.2);
tuple!(A.0, B.1, C.2, D.3);
tuple!(A.0, B.1, C.2, D.3, E.4);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);
