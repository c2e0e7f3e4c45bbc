use crate::tuple::{Tuple2, Tuple3, Tuple4, Tuple5, Tuple6};

pub trait Sailed {}

impl<T1, T2> Sailed for Tuple2<T1, T2> {}
impl<T1, T2, T3> Sailed for Tuple3<T1, T2, T3> {}
impl<T1, T2, T3, T4> Sailed for Tuple4<T1, T2, T3, T4> {}
impl<T1, T2, T3, T4, T5> Sailed for Tuple5<T1, T2, T3, T4, T5> {}
impl<T1, T2, T3, T4, T5, T6> Sailed for Tuple6<T1, T2, T3, T4, T5, T6> {}
