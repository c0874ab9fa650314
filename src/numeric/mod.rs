mod impl_fold;
mod impl_logical;
mod impl_numeric;
