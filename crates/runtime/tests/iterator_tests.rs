
mod iterator {
    use crate::runtime_test_utils::*;
    use lark_runtime::{
        core_lib::iterator::{self, generators},
        prelude::*,
    };

    fn numbers(values: &[i64]) -> Value {
        number_row(values).into()
    }

    fn int_range(start: i64, stop: i64, step: i64) -> Function {
        iterator::range(
            Some(start.into()),
            Some(stop.into()),
            Some(step.into()),
        )
        .unwrap()
    }

    mod range {
        use super::*;

        #[test]
        fn ascending() {
            assert_eq!(collect_numbers(&int_range(0, 5, 1)), [0, 1, 2, 3, 4]);
        }

        #[test]
        fn descending() {
            assert_eq!(collect_numbers(&int_range(5, 0, -1)), [5, 4, 3, 2, 1]);
        }

        #[test]
        fn with_stride() {
            assert_eq!(collect_numbers(&int_range(0, 10, 3)), [0, 3, 6, 9]);
        }

        #[test]
        fn default_step_follows_direction() {
            let descending = iterator::range(Some(3.into()), Some(0.into()), None).unwrap();
            assert_eq!(collect_numbers(&descending), [3, 2, 1]);
        }

        #[test]
        fn default_start_is_zero() {
            let range = iterator::range(None, Some(3.into()), None).unwrap();
            assert_eq!(collect_numbers(&range), [0, 1, 2]);
        }

        #[test]
        fn zero_step_is_rejected() {
            let result = iterator::range(Some(0.into()), Some(5.into()), Some(0.into()));
            assert!(result.is_err());
        }

        #[test]
        fn empty_when_start_is_past_stop() {
            assert!(collect_numbers(&int_range(5, 5, 1)).is_empty());
            assert!(collect_numbers(&int_range(6, 5, 1)).is_empty());
        }

        #[test]
        fn exhaustion_is_permanent() {
            let range = int_range(0, 2, 1);
            collect_numbers(&range);
            assert!(collect_numbers(&range).is_empty());
        }
    }

    mod repeat {
        use super::*;

        #[test]
        fn bounded() {
            let repeat = iterator::repeat("x".into(), Some(3.into()));
            let values = collect_values(&repeat);
            assert_eq!(values.len(), 3);
            assert!(values.iter().all(|v| matches!(v, Value::Str(s) if &**s == "x")));
        }

        #[test]
        fn unbounded_keeps_yielding() {
            let repeat = iterator::repeat(1.into(), None);
            let first_100 = iterator::take(100.into(), repeat.into()).unwrap();
            assert_eq!(collect_numbers(&first_100).len(), 100);
        }

        #[test]
        fn zero_times_is_empty() {
            let repeat = iterator::repeat(1.into(), Some(0.into()));
            assert!(collect_values(&repeat).is_empty());
        }
    }

    mod map {
        use super::*;

        #[test]
        fn applies_the_function_to_each_value() {
            let doubled = Function::native(Arity::Count(1), |frame| {
                match frame.take(0) {
                    Value::Number(n) => frame.set(0, (n + n).into()),
                    other => return unexpected_type("a number", &other),
                }
                Ok(Arity::Count(1))
            });
            let map = iterator::map(doubled, numbers(&[1, 2, 3])).unwrap();
            assert_eq!(collect_numbers(&map), [2, 4, 6]);
        }

        #[test]
        fn rows_mapped_to_nothing_are_skipped() {
            // Keeps even numbers, produces nothing for odd ones
            let keep_even = Function::native(Arity::Count(1), |frame| {
                match frame.take(0) {
                    Value::Number(n) if n.as_i64() % 2 == 0 => {
                        frame.set(0, n.into());
                        Ok(Arity::Count(1))
                    }
                    Value::Number(_) => Ok(Arity::Count(0)),
                    other => unexpected_type("a number", &other),
                }
            });
            let map = iterator::map(keep_even, numbers(&[1, 2, 3, 4, 5])).unwrap();
            assert_eq!(collect_numbers(&map), [2, 4]);
        }
    }

    mod filter {
        use super::*;

        #[test]
        fn keeps_rows_passing_the_predicate() {
            let filter = iterator::filter(is_even(), numbers(&[1, 2, 3, 4, 5, 6])).unwrap();
            assert_eq!(collect_numbers(&filter), [2, 4, 6]);
        }

        #[test]
        fn empty_result_when_nothing_passes() {
            let filter = iterator::filter(is_even(), numbers(&[1, 3, 5])).unwrap();
            assert!(collect_numbers(&filter).is_empty());
        }
    }

    mod take {
        use super::*;

        #[test]
        fn count_limits_an_infinite_source() {
            let take = iterator::take(3.into(), int_range(0, 100, 1).into()).unwrap();
            assert_eq!(collect_numbers(&take), [0, 1, 2]);
        }

        #[test]
        fn count_larger_than_the_source() {
            let take = iterator::take(10.into(), numbers(&[1, 2])).unwrap();
            assert_eq!(collect_numbers(&take), [1, 2]);
        }

        #[test]
        fn predicate_excludes_the_failing_candidate() {
            let take = iterator::take(
                less_than(30).into(),
                numbers(&[10, 20, 30, 10]),
            )
            .unwrap();
            assert_eq!(collect_numbers(&take), [10, 20]);
        }
    }

    mod drop {
        use super::*;

        #[test]
        fn count_skips_leading_values() {
            let drop = iterator::drop(2.into(), numbers(&[10, 20, 30])).unwrap();
            assert_eq!(collect_numbers(&drop), [30]);
        }

        #[test]
        fn count_past_the_end_is_empty() {
            let drop = iterator::drop(5.into(), numbers(&[10, 20])).unwrap();
            assert!(collect_numbers(&drop).is_empty());
        }

        #[test]
        fn predicate_disables_itself_after_the_first_failure() {
            let drop = iterator::drop(less_than(20).into(), numbers(&[10, 20, 30, 10])).unwrap();
            // The trailing 10 passes through: filtering ended at 20
            assert_eq!(collect_numbers(&drop), [20, 30, 10]);
        }
    }

    mod zip {
        use super::*;

        #[test]
        fn yields_one_row_per_step_across_sources() {
            let sources = Table::from_values([
                int_range(0, 3, 1).into(),
                int_range(10, 13, 1).into(),
            ]);
            let zip = iterator::zip(sources.into()).unwrap();
            let rows = collect_rows(&zip);
            assert_eq!(rows.len(), 3);
            assert_eq!(
                rows.iter()
                    .flat_map(|row| row.values())
                    .map(|v| match v {
                        Value::Number(n) => n.as_i64(),
                        other => panic!("expected a number, found {other:?}"),
                    })
                    .collect::<Vec<_>>(),
                [0, 10, 1, 11, 2, 12]
            );
        }

        #[test]
        fn stops_at_the_shortest_source() {
            let sources = Table::from_values([
                int_range(0, 2, 1).into(),
                int_range(0, 100, 1).into(),
            ]);
            let zip = iterator::zip(sources.into()).unwrap();
            assert_eq!(collect_rows(&zip).len(), 2);
        }

        #[test]
        fn no_sources_is_empty() {
            let zip = iterator::zip(Table::new().into()).unwrap();
            assert!(collect_rows(&zip).is_empty());
        }
    }

    mod chain {
        use super::*;

        #[test]
        fn exhausts_each_source_in_turn() {
            let sources = Table::from_values([
                int_range(0, 2, 1).into(),
                int_range(10, 12, 1).into(),
            ]);
            let chain = iterator::chain(sources.into()).unwrap();
            assert_eq!(collect_numbers(&chain), [0, 1, 10, 11]);
        }

        #[test]
        fn empty_sources_are_passed_over() {
            let sources = Table::from_values([
                int_range(0, 0, 1).into(),
                int_range(0, 0, 1).into(),
                int_range(5, 6, 1).into(),
                int_range(0, 0, 1).into(),
            ]);
            let chain = iterator::chain(sources.into()).unwrap();
            assert_eq!(collect_numbers(&chain), [5]);
        }
    }

    mod reduce {
        use super::*;

        #[test]
        fn seeded() {
            let result =
                iterator::reduce(add(), numbers(&[1, 2, 3]), Some(number_row(&[0]))).unwrap();
            assert_eq!(result.len(), 1);
            assert!(matches!(result.get_index(0), Value::Number(n) if n.as_i64() == 6));
        }

        #[test]
        fn unseeded_uses_the_first_row() {
            let result = iterator::reduce(add(), numbers(&[1, 2, 3]), None).unwrap();
            assert!(matches!(result.get_index(0), Value::Number(n) if n.as_i64() == 6));
        }

        #[test]
        fn empty_source_without_a_seed_is_an_empty_row() {
            let result = iterator::reduce(add(), Table::new().into(), None).unwrap();
            assert!(result.is_empty());
        }
    }

    mod any_all {
        use super::*;

        #[test]
        fn any_without_a_match_is_false() {
            assert!(!iterator::any(is_even(), numbers(&[1, 3, 5])).unwrap());
        }

        #[test]
        fn all_with_every_match_is_true() {
            assert!(iterator::all(is_even(), numbers(&[2, 4, 6])).unwrap());
        }

        #[test]
        fn any_short_circuits() {
            let (source, pulls) = counting(int_range(0, 100, 1));
            assert!(iterator::any(is_even(), source.into()).unwrap());
            assert_eq!(pulls.get(), 1);
        }

        #[test]
        fn all_short_circuits() {
            let (source, pulls) = counting(int_range(1, 100, 1));
            assert!(!iterator::all(is_even(), source.into()).unwrap());
            assert_eq!(pulls.get(), 1);
        }

        #[test]
        fn empty_source_identities() {
            assert!(!iterator::any(is_even(), Table::new().into()).unwrap());
            assert!(iterator::all(is_even(), Table::new().into()).unwrap());
        }
    }

    mod min_max {
        use super::*;

        #[test]
        fn min_and_max_of_a_table() {
            let min = iterator::min(numbers(&[3, 1, 2])).unwrap();
            assert!(matches!(min.get_index(0), Value::Number(n) if n.as_i64() == 1));

            let max = iterator::max(numbers(&[3, 1, 2])).unwrap();
            assert!(matches!(max.get_index(0), Value::Number(n) if n.as_i64() == 3));
        }

        #[test]
        fn ties_keep_the_earliest_row() {
            // Zipped (key, tag) rows: the tag marks the original position
            let keys = number_row(&[1, 1]);
            let tags = Table::from_values(["first".into(), "second".into()]);
            let rows = iterator::zip(Table::from_values([keys.into(), tags.into()]).into()).unwrap();
            let min = iterator::min(rows.into()).unwrap();
            assert!(matches!(min.get_index(1), Value::Str(s) if &*s == "first"));
        }

        #[test]
        fn empty_source_is_an_error() {
            let result = iterator::min(Table::new().into());
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("min"));
        }
    }

    mod reverse {
        use super::*;

        #[test]
        fn replays_in_reverse_order() {
            let reversed = iterator::reverse(int_range(0, 5, 1).into()).unwrap();
            assert_eq!(collect_numbers(&reversed), [4, 3, 2, 1, 0]);
        }

        #[test]
        fn empty_source() {
            let reversed = iterator::reverse(Table::new().into()).unwrap();
            assert!(collect_numbers(&reversed).is_empty());
        }
    }

    mod sort {
        use super::*;

        #[test]
        fn sorts_by_primary_value() {
            let sorted = iterator::sort(numbers(&[3, 1, 4, 1, 5, 9, 2, 6])).unwrap();
            assert_eq!(collect_numbers(&sorted), [1, 1, 2, 3, 4, 5, 6, 9]);
        }

        #[test]
        fn equal_keys_keep_their_original_order() {
            // Zipped (key, tag) rows: tags record the original positions
            let keys = number_row(&[1, 0, 1, 0]);
            let tags = number_row(&[0, 1, 2, 3]);
            let rows = iterator::zip(Table::from_values([keys.into(), tags.into()]).into()).unwrap();
            let sorted = iterator::sort(rows.into()).unwrap();
            let tags: Vec<i64> = collect_rows(&sorted)
                .iter()
                .map(|row| match row.get_index(1) {
                    Value::Number(n) => n.as_i64(),
                    other => panic!("expected a number, found {other:?}"),
                })
                .collect();
            assert_eq!(tags, [1, 3, 0, 2]);
        }

        #[test]
        fn incomparable_values_fail() {
            let mixed = Table::from_values([1.into(), "a".into()]);
            assert!(iterator::sort(mixed.into()).is_err());
        }
    }

    mod table_iteration {
        use super::*;

        #[test]
        fn tables_iterate_over_their_values() {
            let table = Table::new();
            table.insert_named("a", 1.into());
            table.insert_named("b", 2.into());
            let iter = to_iterator(table.into()).unwrap();
            assert_eq!(collect_numbers(&iter), [1, 2]);
        }

        #[test]
        fn non_iterable_values_are_rejected() {
            assert!(to_iterator(Value::Bool(true)).is_err());
            assert!(to_iterator(1.into()).is_err());
        }

        #[test]
        fn generator_state_is_shared_between_clones() {
            let iter = Function::stateful(
                Arity::Count(0),
                generators::Range::new(0.into(), 10.into(), 1.into()),
            );
            let clone = iter.clone();

            let frame = &mut Frame::new();
            assert!(step(&iter, frame, Arity::Count(1)).unwrap());
            assert!(step(&clone, frame, Arity::Count(1)).unwrap());
            // The clone observed the original's advance
            assert!(matches!(frame.get(0), Value::Number(n) if n.as_i64() == 1));
        }
    }
}
