/// Instantiates each test function once per cursor backend.
///
/// Every function takes a `&mut RowTest`.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        mod value {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::RowTest::value();
                    super::$f(&mut test);
                }
            )*
        }

        #[cfg(feature = "sqlite")]
        mod sqlite {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::RowTest::sqlite();
                    super::$f(&mut test);
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}

/// Builds a column list: `columns!("id" => 1i64, "name" => "ada")`.
#[macro_export]
macro_rules! columns {
    ( $( $label:expr => $value:expr ),* $(,)? ) => {
        vec![ $( ($label, $crate::Value::from($value)) ),* ]
    };
}
