//! Modelo de objetos: composición, traits como mixins, estrategias,
//! observadores y despacho explícito por nombre.
use std::cell::RefCell;
use std::rc::Rc;

use spec_core::{assert_equal, assert_nothing_raised, assert_raises, assert_true, RaisesKind, SuiteBuilder};
use thiserror::Error;

use super::LearningState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectErrorKind {
    NoMethod,
    Argument,
    Abstract,
}

/// Errores de los objetos de ejemplo.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectError {
    #[error("método no definido: `{0}`")]
    NoMethod(String),
    #[error("argumento inválido: {0}")]
    Argument(String),
    #[error("método abstracto: {0}")]
    Abstract(&'static str),
}

impl RaisesKind for ObjectError {
    type Kind = ObjectErrorKind;

    fn raised_kind(&self) -> ObjectErrorKind {
        match self {
            ObjectError::NoMethod(_) => ObjectErrorKind::NoMethod,
            ObjectError::Argument(_) => ObjectErrorKind::Argument,
            ObjectError::Abstract(_) => ObjectErrorKind::Abstract,
        }
    }
}

/// Pedidos conocidos por `Roman`; cualquier otro nombre cae en `Unhandled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomanRequest {
    Numeral(u32),
    Unhandled(String),
}

impl RomanRequest {
    pub fn parse(name: &str) -> Self {
        match name {
            "i" => RomanRequest::Numeral(1),
            "ii" => RomanRequest::Numeral(2),
            "iii" => RomanRequest::Numeral(3),
            other => RomanRequest::Unhandled(other.to_string()),
        }
    }
}

struct Roman;

impl Roman {
    fn call(&self, name: &str) -> Result<u32, ObjectError> {
        match RomanRequest::parse(name) {
            RomanRequest::Numeral(n) => Ok(n),
            RomanRequest::Unhandled(name) => Err(ObjectError::NoMethod(name)),
        }
    }
}

struct Point {
    x: i32,
    y: i32,
}

struct Point3D {
    base: Point,
    z: i32,
}

impl Point3D {
    fn new(x: i32, y: i32, z: i32) -> Self {
        Self { base: Point { x, y },
               z }
    }

    fn show(&self) -> String {
        format!("{} {} {}", self.base.x, self.base.y, self.z)
    }
}

trait Describe {
    fn type_name(&self) -> &'static str;

    fn describe(&self) -> String {
        format!("instance of {}", self.type_name())
    }
}

struct MyClass;

impl Describe for MyClass {
    fn type_name(&self) -> &'static str {
        "MyClass"
    }
}

/// Método plantilla: `jogo` arma el texto con los ganchos de cada estilo.
trait Capoeira {
    fn grupo(&self) -> &'static str;

    fn ladainha(&self) -> Result<&'static str, ObjectError> {
        Err(ObjectError::Abstract("ladainha"))
    }

    fn sao_bento(&self) -> Result<&'static str, ObjectError> {
        Err(ObjectError::Abstract("sao_bento"))
    }

    fn jogo(&self) -> Result<String, ObjectError> {
        Ok(format!("{} é bamba. {} {}", self.grupo(), self.ladainha()?, self.sao_bento()?))
    }
}

struct Generic;

impl Capoeira for Generic {
    fn grupo(&self) -> &'static str {
        "Capoeira"
    }
}

struct Angola;

impl Capoeira for Angola {
    fn grupo(&self) -> &'static str {
        "FICA"
    }

    fn ladainha(&self) -> Result<&'static str, ObjectError> {
        Ok("Luanda ê")
    }

    fn sao_bento(&self) -> Result<&'static str, ObjectError> {
        Ok("Jogo de dentro, jogo legal")
    }
}

trait Estilo {
    fn jogo(&self, grupo: &str) -> String;
}

struct EstiloRegional;
struct EstiloAngola;

impl Estilo for EstiloRegional {
    fn jogo(&self, grupo: &str) -> String {
        format!("{grupo} é bamba. Forma roda, canta ladainha, canta SB grande")
    }
}

impl Estilo for EstiloAngola {
    fn jogo(&self, grupo: &str) -> String {
        format!("{grupo} é bamba. Forma roda, canta ladainha, canta SB pequeno")
    }
}

struct Roda {
    grupo: String,
    estilo: Box<dyn Estilo>,
}

impl Roda {
    fn jogo(&self) -> String {
        self.estilo.jogo(&self.grupo)
    }
}

trait Observer {
    fn update(&mut self, name: &str, salary: u32);
}

#[derive(Default)]
struct TaxMan {
    response: Option<String>,
}

impl Observer for TaxMan {
    fn update(&mut self, _name: &str, salary: u32) {
        self.response = Some(format!("{salary} more for me!"));
    }
}

struct Employee {
    name: String,
    salary: u32,
    observers: Vec<Rc<RefCell<dyn Observer>>>,
}

impl Employee {
    fn new(name: &str, salary: u32) -> Self {
        Self { name: name.to_string(),
               salary,
               observers: Vec::new() }
    }

    fn add_observer(&mut self, observer: Rc<RefCell<dyn Observer>>) {
        self.observers.push(observer);
    }

    fn set_salary(&mut self, salary: u32) {
        self.salary = salary;
        for observer in &self.observers {
            observer.borrow_mut().update(&self.name, self.salary);
        }
    }
}

fn increment(value: &str) -> Result<i64, ObjectError> {
    value.trim()
         .parse::<i64>()
         .map(|n| n + 1)
         .map_err(|_| ObjectError::Argument(value.to_string()))
}

pub(crate) fn register(suite: &mut SuiteBuilder<LearningState>) {
    suite.context("Object model", |c| {
             c.should("dispatch known names and reject the rest explicitly", |_| {
                  let roman = Roman;
                  assert_equal!(RomanRequest::Numeral(3), RomanRequest::parse("iii"));
                  assert_equal!(RomanRequest::Unhandled("iv".into()), RomanRequest::parse("iv"));
                  assert_equal!(3, assert_nothing_raised!(|| roman.call("iii")));
                  assert_raises!(ObjectErrorKind::NoMethod, || roman.call("iv"));
                  Ok(())
              });

             c.should("chain to the composed base", |_| {
                  assert_equal!("2 3 4", Point3D::new(2, 3, 4).show());
                  Ok(())
              });

             c.should("mix in default methods through traits", |_| {
                  assert_equal!("instance of MyClass", MyClass.describe());
                  Ok(())
              });

             c.context("Template method", |c| {
                  c.should("fail when a hook is not provided", |_| {
                       assert_raises!(ObjectErrorKind::Abstract, || Generic.jogo());
                       Ok(())
                   });

                  c.should("build the text from the concrete hooks", |_| {
                       let jogo = assert_nothing_raised!(|| Angola.jogo());
                       assert_equal!("FICA é bamba. Luanda ê Jogo de dentro, jogo legal", jogo);
                       Ok(())
                   });
              });

             c.context("Strategy", |c| {
                  c.should("switch strategies at runtime", |_| {
                       let mut roda = Roda { grupo: "FICA".to_string(),
                                             estilo: Box::new(EstiloAngola) };
                       assert_equal!("FICA é bamba. Forma roda, canta ladainha, canta SB pequeno", roda.jogo());
                       roda.estilo = Box::new(EstiloRegional);
                       assert_true!(roda.jogo().ends_with("SB grande"));
                       Ok(())
                   });

                  c.should("accept closures as strategies", |_| {
                       let estilo: Box<dyn Fn(&str) -> String> = Box::new(|grupo: &str| format!("{grupo} é bamba"));
                       assert_equal!("Capoeira Gerais é bamba", estilo("Capoeira Gerais"));
                       Ok(())
                   });
              });

             c.should("notify observers when the subject changes", |_| {
                  let tax_man = Rc::new(RefCell::new(TaxMan::default()));
                  let mut pepe = Employee::new("pepe", 10_000);
                  pepe.add_observer(tax_man.clone());
                  pepe.set_salary(20_000);
                  assert_equal!(Some("20000 more for me!".to_string()), tax_man.borrow().response);
                  Ok(())
              });

             c.should("report invalid arguments by kind", |_| {
                  assert_equal!(3, assert_nothing_raised!(|| increment("2")));
                  assert_raises!(ObjectErrorKind::Argument, || increment("error"));
                  Ok(())
              });
         });
}
