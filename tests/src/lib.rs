#[cfg(test)]
macro_rules! args {
    ($($st : literal)*) => {
        vec![$($st.to_string()),*]
    }
}

#[cfg(test)]
macro_rules! take_from {
    ($ty: ty, $($st: literal)*) => {{
        let mut args = args!($($st)*);
        let taken = <$ty as lethargy::Options>::take_from(&mut args);
        (taken, args)
    }}
}

mod build;
mod grep;
