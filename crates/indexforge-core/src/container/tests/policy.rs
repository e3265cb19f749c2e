use super::*;
use crate::component::Component;

fn doubled() -> PolicyContainer {
    PolicyContainer::new("doubled", one_two_three(), |_, index| {
        Ok(RuleOutcome::value(int(index) * 2))
    })
    .unwrap()
}

#[test]
fn test_policy_container_constructs_from_rule() {
    let mut c = doubled();
    assert_eq!(c.state(), ConstructionState::Declared);
    c.construct().unwrap();
    assert_eq!(c.len(), 3);
    assert_eq!(c.get(2), Some(&Entry::from(4)));
}

#[test]
fn test_policy_container_rejects_add() {
    let mut c = doubled();
    c.construct().unwrap();
    let err = Component::add(&mut c, IndexKey::Int(1), Entry::from(0)).unwrap_err();
    assert!(matches!(
        err,
        ComponentError::UnsupportedOperation { operation: "add", .. }
    ));
    assert_eq!(c.len(), 3);
}

#[test]
fn test_indexed_container_add_through_trait() {
    let mut c = IndexedContainer::builder("p", one_two_three()).build().unwrap();
    let component: &mut dyn Component = &mut c;
    component.add(IndexKey::Int(2), Entry::from(1)).unwrap();
    assert_eq!(component.len(), 1);
    assert_eq!(component.kind(), ComponentKind::Data);
}

#[test]
fn test_component_downcast() {
    let boxed: Box<dyn Component> = Box::new(doubled());
    assert!(boxed.as_any().downcast_ref::<PolicyContainer>().is_some());
    assert!(boxed.as_any().downcast_ref::<IndexedContainer>().is_none());
}
